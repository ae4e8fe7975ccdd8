// src/presentation/http/middleware/mod.rs
pub mod rate_limit;

pub use rate_limit::contact_rate_limit_layer;
