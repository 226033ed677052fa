use bevy::prelude::*;
use flux_core::{
    Connection, ConnectionStrategy, FieldConfig, FieldError, FieldRotation, FrameInput,
    FrameOutput, Viewport,
};
use flux_physics::connections::{self, SpatialGrid};
use flux_physics::integrator::{self, IntegratorParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::store::ParticleStore;

/// Default window aspect before the first resize is seen
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// The particle field simulator, tracked as a Bevy Resource.
///
/// Single writer: only [`ParticleField::tick`] and [`ParticleField::reset`]
/// change particle state. Renderers read through [`ParticleField::output`].
#[derive(Resource)]
pub struct ParticleField {
    config: FieldConfig,
    store: ParticleStore,
    params: IntegratorParams,
    /// World-space extent of the z = 0 plane, for pointer mapping
    viewport: Viewport,
    /// Rebuilt every tick, never grows past `capacity`
    connections: Vec<Connection>,
    capacity: usize,
    /// Present only for the grid strategy
    grid: Option<SpatialGrid>,
    rotation: FieldRotation,
    /// Ticks since creation or the last reset
    frame: u64,
    /// Particles rescaled onto the containment sphere last tick
    contained: usize,
}

impl ParticleField {
    /// Build a field with a seeded spherical shell
    pub fn create(config: &FieldConfig) -> Result<Self, FieldError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let store = ParticleStore::initialize(config, &mut rng);
        let field = Self::with_store(config, store);
        info!(
            "Particle field: {} particles (seed {}), {:?}, capacity {}",
            field.particle_count(),
            config.seed,
            config.connection_strategy,
            field.capacity
        );
        Ok(field)
    }

    /// Build a field from explicit buffers, sized `config.particle_count`
    pub fn from_buffers(
        config: &FieldConfig,
        positions: Vec<[f32; 3]>,
        velocities: Vec<[f32; 3]>,
    ) -> Result<Self, FieldError> {
        config.validate()?;
        let store =
            ParticleStore::from_buffers(config.particle_count as usize, positions, velocities)?;
        Ok(Self::with_store(config, store))
    }

    fn with_store(config: &FieldConfig, store: ParticleStore) -> Self {
        let n = store.len();
        let capacity = config.connection_capacity();
        // No more than n(n-1)/2 distinct pairs can ever be emitted
        let reserved = capacity.min(n * n.saturating_sub(1) / 2);
        let grid = match config.connection_strategy {
            ConnectionStrategy::PairScan => None,
            ConnectionStrategy::Grid => Some(SpatialGrid::new()),
        };

        Self {
            config: config.clone(),
            store,
            params: IntegratorParams::from(config),
            viewport: Viewport::from_camera(
                config.camera_fov_degrees,
                config.camera_distance,
                DEFAULT_ASPECT,
            ),
            connections: Vec::with_capacity(reserved),
            capacity,
            grid,
            rotation: FieldRotation::default(),
            frame: 0,
            contained: 0,
        }
    }

    /// Regenerate every particle from the configured seed
    pub fn reset(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.store = ParticleStore::initialize(&self.config, &mut rng);
        self.connections.clear();
        self.rotation = FieldRotation::default();
        self.frame = 0;
        self.contained = 0;
        info!("Particle field reset ({} particles)", self.store.len());
    }

    /// Advance one frame at `elapsed` seconds since start.
    ///
    /// Integrates positions, rebuilds the connection list and updates the
    /// group rotation. Non-finite input is rejected before any state changes.
    pub fn tick(&mut self, elapsed: f32, input: FrameInput) -> Result<FrameOutput<'_>, FieldError> {
        if !elapsed.is_finite() || !input.is_finite() {
            return Err(FieldError::NonFiniteInput);
        }

        let target = self.viewport.pointer_target(&input);
        let (positions, velocities) = self.store.split_mut();
        self.contained = integrator::integrate(positions, velocities, elapsed, target, &self.params);

        let threshold = self.config.connection_distance;
        match self.grid.as_mut() {
            Some(grid) => grid.connections(
                self.store.positions(),
                threshold,
                self.capacity,
                &mut self.connections,
            ),
            None => connections::pair_scan(
                self.store.positions(),
                threshold,
                self.capacity,
                &mut self.connections,
            ),
        }

        self.rotation = FieldRotation::at(elapsed, input.scroll_progress);
        self.frame += 1;

        Ok(self.output())
    }

    /// Current frame, as left by the last tick
    pub fn output(&self) -> FrameOutput<'_> {
        FrameOutput {
            positions: self.store.positions_flat(),
            connections: &self.connections,
            rotation: self.rotation,
        }
    }

    /// Update the world-space viewport used to place the pointer target
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), FieldError> {
        for (name, value) in [("viewport.width", viewport.width), ("viewport.height", viewport.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::InvalidParameter { name, value });
            }
        }
        self.viewport = viewport;
        Ok(())
    }

    /// Viewport for a window of the given aspect ratio, from the camera config
    pub fn viewport_for_aspect(&self, aspect: f32) -> Viewport {
        Viewport::from_camera(
            self.config.camera_fov_degrees,
            self.config.camera_distance,
            aspect,
        )
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        self.store.positions()
    }

    /// Direct access for seeding scenarios; not used by the tick loop
    pub fn positions_mut(&mut self) -> &mut [[f32; 3]] {
        self.store.positions_mut()
    }

    pub fn velocities(&self) -> &[[f32; 3]] {
        self.store.velocities()
    }

    pub fn velocities_mut(&mut self) -> &mut [[f32; 3]] {
        self.store.velocities_mut()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection_capacity(&self) -> usize {
        self.capacity
    }

    pub fn rotation(&self) -> FieldRotation {
        self.rotation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn contained_last_frame(&self) -> usize {
        self.contained
    }
}
