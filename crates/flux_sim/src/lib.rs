pub mod field;
pub mod input;
pub mod pipeline;
pub mod store;
