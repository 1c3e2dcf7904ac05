//! Concrete implementations of the domain's storage contracts.

pub mod persistence;
