//! Construction and auditing of Lottie documents built on `lottie-data`.

pub mod audit;
pub mod builders;

pub use audit::{audit_document, Violation, ViolationKind};
pub use builders::*;
