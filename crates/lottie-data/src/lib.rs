//! Typed model of the Lottie subset written by the cat generator.

pub mod model;
