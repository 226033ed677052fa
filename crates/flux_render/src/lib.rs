pub mod camera;
pub mod connections;
pub mod cursor;
pub mod dust;
pub mod easing;
pub mod particles;
pub mod plugin;
pub mod ui;
