//! Infrastructure layer - Model loading, caching, processes and observability

pub mod cache;
pub mod launcher;
pub mod logging;
pub mod model;
pub mod observability;
pub mod services;
