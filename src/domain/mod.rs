//! Domain layer: [`entities`] are plain data, [`repositories`] are the
//! storage contracts implemented in `crate::infrastructure`. Nothing here
//! depends on the HTTP or persistence layers.

pub mod entities;
pub mod repositories;
