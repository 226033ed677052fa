use flux_core::{FieldConfig, FieldError};
use flux_physics::procgen;
use rand::Rng;

/// Canonical position and velocity buffers, one entry per particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStore {
    positions: Vec<[f32; 3]>,
    velocities: Vec<[f32; 3]>,
}

impl ParticleStore {
    /// Fresh spherical shell sized by the config
    pub fn initialize(config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let (positions, velocities) = procgen::spherical_shell(
            config.particle_count as usize,
            config.initial_radius,
            config.drift_velocity,
            rng,
        );
        Self {
            positions,
            velocities,
        }
    }

    /// Store seeded with explicit buffers (both must hold `count` particles)
    pub fn from_buffers(
        count: usize,
        positions: Vec<[f32; 3]>,
        velocities: Vec<[f32; 3]>,
    ) -> Result<Self, FieldError> {
        for actual in [positions.len(), velocities.len()] {
            if actual != count {
                return Err(FieldError::BufferLength {
                    expected: count,
                    actual,
                });
            }
        }
        Ok(Self {
            positions,
            velocities,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.positions
    }

    pub fn velocities(&self) -> &[[f32; 3]] {
        &self.velocities
    }

    pub fn velocities_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.velocities
    }

    /// Positions as 3 * N contiguous floats
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Mutable positions alongside read-only velocities, for the integrator
    pub fn split_mut(&mut self) -> (&mut [[f32; 3]], &[[f32; 3]]) {
        (&mut self.positions, &self.velocities)
    }
}
