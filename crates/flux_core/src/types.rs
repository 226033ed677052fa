use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::constants::{PITCH_AMPLITUDE, PITCH_FREQUENCY, YAW_SPEED};

/// Externally sampled scalars driving one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Pointer x in [-1, 1], left to right
    pub pointer_x: f32,
    /// Pointer y in [-1, 1], bottom to top
    pub pointer_y: f32,
    /// Page scroll in [0, 1]
    pub scroll_progress: f32,
}

impl FrameInput {
    pub fn new(pointer_x: f32, pointer_y: f32, scroll_progress: f32) -> Self {
        Self {
            pointer_x,
            pointer_y,
            scroll_progress,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.pointer_x.is_finite() && self.pointer_y.is_finite() && self.scroll_progress.is_finite()
    }
}

/// Line between two particles closer than the connection distance.
/// Laid out for direct upload as a vertex/storage buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Connection {
    /// Lower particle index
    pub a: u32,
    /// Higher particle index (always > a)
    pub b: u32,
    /// 1 - distance / threshold, in (0, 1]
    pub alpha: f32,
}

/// Visible world-space extent of the z = 0 plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Extent seen by a perspective camera at `distance` from the plane
    pub fn from_camera(fov_degrees: f32, distance: f32, aspect: f32) -> Self {
        let height = 2.0 * (fov_degrees.to_radians() * 0.5).tan() * distance;
        Self {
            width: height * aspect,
            height,
        }
    }

    /// Map a normalized pointer into world coordinates on the z = 0 plane
    pub fn pointer_target(&self, input: &FrameInput) -> [f32; 2] {
        [
            input.pointer_x * self.width * 0.5,
            input.pointer_y * self.height * 0.5,
        ]
    }
}

/// Group rotation applied to the whole field when rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRotation {
    /// Rotation around Y (radians)
    pub yaw: f32,
    /// Rotation around X (radians)
    pub pitch: f32,
}

impl FieldRotation {
    /// Slow spin plus one full turn over the length of the page
    pub fn at(time: f32, scroll_progress: f32) -> Self {
        Self {
            yaw: time * YAW_SPEED + scroll_progress * std::f32::consts::TAU,
            pitch: (time * PITCH_FREQUENCY).sin() * PITCH_AMPLITUDE,
        }
    }
}

/// Read-only view of one simulated frame
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput<'a> {
    /// Flat x, y, z triples, 3 * N values
    pub positions: &'a [f32],
    /// Ordered by (a, b)
    pub connections: &'a [Connection],
    pub rotation: FieldRotation,
}

impl FrameOutput<'_> {
    pub fn particle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position of particle `index`, `None` past the end
    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let i3 = index.checked_mul(3)?;
        match self.positions.get(i3..i3.checked_add(3)?)? {
            &[x, y, z] => Some([x, y, z]),
            _ => None,
        }
    }
}
