// Field constants (world units, one frame = one integration step)
// The camera sits 12 units from the origin, so the containment sphere of
// radius 8 fills most of a 60° view.

/// Default number of particles in the field
pub const PARTICLE_COUNT: u32 = 150;

/// Inner and outer radius of the initial spherical shell
pub const INITIAL_RADIUS_MIN: f32 = 3.0;
pub const INITIAL_RADIUS_MAX: f32 = 7.0;

/// Per-axis drift velocity range (units per frame), symmetric around zero
pub const DRIFT_VELOCITY: f32 = 0.01;

/// Two particles closer than this are joined by a line
pub const CONNECTION_DISTANCE: f32 = 2.5;

/// Amplitude of the per-particle oscillation added every frame
pub const OSCILLATION_AMPLITUDE: f32 = 0.003;

/// Angular frequencies of the oscillation on x, y, z (rad/s)
pub const OSCILLATION_FREQUENCY: [f32; 3] = [0.5, 0.3, 0.4];

/// Planar radius around the pointer target inside which particles are pulled
pub const ATTRACTION_RADIUS: f32 = 3.0;

/// Peak pointer pull, reached when a particle sits on the target
pub const MOUSE_INFLUENCE: f32 = 0.3;

/// Euler step applied to the pointer pull
pub const ATTRACTION_STEP: f32 = 0.01;

/// Particles never end a frame further than this from the origin
pub const CONTAINMENT_RADIUS: f32 = 8.0;

/// Field rotation: yaw speed (rad/s) and pitch wobble
pub const YAW_SPEED: f32 = 0.1;
pub const PITCH_AMPLITUDE: f32 = 0.2;
pub const PITCH_FREQUENCY: f32 = 0.05;

/// Camera placement used to derive the world-space viewport
pub const CAMERA_DISTANCE: f32 = 12.0;
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
