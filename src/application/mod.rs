//! Application layer. Services consume repository traits and expose the
//! operations the HTTP handlers call; they never touch SQL directly.

pub mod services;
