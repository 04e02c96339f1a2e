//! cie-table - CIE 1931 brightness correction headers
//!
//! Generates the lookup table LED firmware uses to turn a linear brightness
//! level into a perceptually linear PWM duty cycle, and writes it as a C
//! array declaration. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
