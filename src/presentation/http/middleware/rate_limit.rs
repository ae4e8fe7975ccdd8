// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type ContactLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// One contact submission every 30 seconds per client, with a burst of 3.
const REPLENISH_SECONDS: u64 = 30;
const BURST: u32 = 3;

/// Per-IP limiter for the public contact form. Keys come from forwarding
/// headers first, then the peer address, so the router must be served with
/// connect info.
pub fn contact_rate_limit_layer() -> Option<ContactLimiter> {
    static RATE_LIMITER: OnceLock<Option<ContactLimiter>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_SECONDS);
            builder.burst_size(BURST);
            let layer = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .map(GovernorLayer::new);
            if layer.is_none() {
                tracing::warn!("contact rate limiter misconfigured; running without it");
            }
            layer
        })
        .clone()
}
