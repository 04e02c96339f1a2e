pub mod config;

pub use config::{element_capacity, ConfigOverrides, GeneratorConfig};
