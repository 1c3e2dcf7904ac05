//! HTTP surface: [`routes`] wire [`handlers`], which translate between
//! [`dto`] payloads and service calls; [`middleware`] adds request tracing.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
