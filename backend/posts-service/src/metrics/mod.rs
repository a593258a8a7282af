//! Prometheus metrics for posts-service.
//!
//! Store outcomes are counted per operation; `/metrics` renders the registry.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Store operations segmented by operation and outcome
    /// (ok, not_found, parent_not_found, validation_failed, storage_unavailable).
    pub static ref STORE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_store_operations_total",
        "Post and comment store operations segmented by outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register posts_store_operations_total");
}

/// Count one store operation
pub fn record_operation(operation: &str, outcome: &str) {
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
