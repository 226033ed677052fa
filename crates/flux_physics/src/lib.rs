pub mod connections;
pub mod forces;
pub mod integrator;
pub mod procgen;
