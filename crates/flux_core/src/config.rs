use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::FieldError;

/// How the connection list is derived each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionStrategy {
    /// Every unordered pair is tested (reference behavior)
    #[default]
    PairScan,
    /// Particles are bucketed into cells of edge = connection distance
    Grid,
}

/// Particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of particles, fixed for the lifetime of a field
    pub particle_count: u32,
    /// Random seed for the initial distribution
    pub seed: u64,
    /// Initial shell radius range [min, max)
    pub initial_radius: (f32, f32),
    /// Per-axis drift velocity magnitude bound
    pub drift_velocity: f32,
    /// Connection threshold distance
    pub connection_distance: f32,
    /// Maximum connections per frame (None = N²)
    pub connection_capacity: Option<usize>,
    pub connection_strategy: ConnectionStrategy,
    /// Planar pointer attraction radius
    pub attraction_radius: f32,
    /// Pointer attraction strength at zero distance
    pub attraction_strength: f32,
    /// Radius of the containment sphere
    pub containment_radius: f32,
    pub oscillation_amplitude: f32,
    /// Camera distance from the origin, used for the viewport
    pub camera_distance: f32,
    /// Vertical field of view in degrees
    pub camera_fov_degrees: f32,
    /// Virtual page height in pixels (scroll sampling)
    pub document_height: f32,
    /// Visible page height in pixels (scroll sampling)
    pub viewport_height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: 42,
            initial_radius: (INITIAL_RADIUS_MIN, INITIAL_RADIUS_MAX),
            drift_velocity: DRIFT_VELOCITY,
            connection_distance: CONNECTION_DISTANCE,
            connection_capacity: None,
            connection_strategy: ConnectionStrategy::PairScan,
            attraction_radius: ATTRACTION_RADIUS,
            attraction_strength: MOUSE_INFLUENCE,
            containment_radius: CONTAINMENT_RADIUS,
            oscillation_amplitude: OSCILLATION_AMPLITUDE,
            camera_distance: CAMERA_DISTANCE,
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            document_height: 6000.0,
            viewport_height: 1080.0,
        }
    }
}

impl FieldConfig {
    /// Config with the default parameters and a custom particle count
    pub fn with_particle_count(particle_count: u32) -> Self {
        Self {
            particle_count,
            ..Self::default()
        }
    }

    /// Connection buffer size: explicit capacity, or N² when unset
    pub fn connection_capacity(&self) -> usize {
        let n = self.particle_count as usize;
        self.connection_capacity.unwrap_or(n * n)
    }

    /// Reject configurations that would produce a broken field
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(FieldError::InvalidParticleCount(self.particle_count));
        }

        let positive = [
            ("connection_distance", self.connection_distance),
            ("attraction_radius", self.attraction_radius),
            ("containment_radius", self.containment_radius),
            ("camera_distance", self.camera_distance),
            ("camera_fov_degrees", self.camera_fov_degrees),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::InvalidParameter { name, value });
            }
        }

        let non_negative = [
            ("drift_velocity", self.drift_velocity),
            ("attraction_strength", self.attraction_strength),
            ("oscillation_amplitude", self.oscillation_amplitude),
            ("document_height", self.document_height),
            ("viewport_height", self.viewport_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::InvalidParameter { name, value });
            }
        }

        let (min, max) = self.initial_radius;
        if !min.is_finite() || min < 0.0 {
            return Err(FieldError::InvalidParameter {
                name: "initial_radius.min",
                value: min,
            });
        }
        if !max.is_finite() || max <= min {
            return Err(FieldError::InvalidParameter {
                name: "initial_radius.max",
                value: max,
            });
        }
        if self.camera_fov_degrees >= 180.0 {
            return Err(FieldError::InvalidParameter {
                name: "camera_fov_degrees",
                value: self.camera_fov_degrees,
            });
        }

        Ok(())
    }
}
