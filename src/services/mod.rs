pub mod generator;
pub mod output;

pub use generator::{generate, verify, write, Generated, VerifyReport};
pub use output::write_atomic;
