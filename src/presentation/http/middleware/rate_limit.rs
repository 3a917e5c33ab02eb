// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tracing::warn;

pub const REQUESTS_PER_SECOND: u64 = 10;
pub const BURST_SIZE: u32 = 20;

pub type ApiRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the `/api` routes. `None` when the quota is
/// rejected by the governor builder.
pub fn api_rate_limit_layer() -> Option<ApiRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(REQUESTS_PER_SECOND);
    builder.burst_size(BURST_SIZE);
    let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        warn!("invalid rate limit quota; limiter disabled");
        return None;
    };
    Some(GovernorLayer::new(config))
}
