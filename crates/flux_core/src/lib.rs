pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{ConnectionStrategy, FieldConfig};
pub use constants::*;
pub use error::FieldError;
pub use types::*;
