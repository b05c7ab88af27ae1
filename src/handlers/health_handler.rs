//! 健康检查

use crate::models::HealthCheckResponse;
use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use std::time::Instant;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// 启动时调用，使运行时间从服务启动算起
pub fn mark_started() {
    Lazy::force(&START_TIME);
}

/// 服务状态、版本与运行时间
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: START_TIME.elapsed().as_secs(),
    })
}

/// 存活探针
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "alive": true }))
}
