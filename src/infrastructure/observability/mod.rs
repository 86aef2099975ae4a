//! Observability infrastructure - Metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_cache_lookup, record_http_request,
    record_prediction, record_prediction_error, PrometheusMetrics,
};
