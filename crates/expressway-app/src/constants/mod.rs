//! Built-in reference data

pub mod corridor_data;

pub use corridor_data::{delhi_mumbai_expressway, CORRIDOR_NAME};
