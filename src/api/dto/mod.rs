//! Request and response shapes: serde for the JSON, validator for the
//! field-level checks.

pub mod health;
pub mod post;
pub mod tag;
pub mod user;
