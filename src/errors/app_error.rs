//! 统一错误类型定义

use crate::models::ApiResponse;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// 应用错误类型
///
/// 所有错误最终都渲染为 `{code: 1, data: null, msg}` 信封。
/// 业务错误沿用 Mock 约定返回 HTTP 200，由客户端检查 `code`。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 资源不存在
    #[error("{0}")]
    NotFound(String),

    // 路径或查询中缺少 ID
    #[error("{0}")]
    MissingParameter(String),

    // 请求体/查询无法解析
    #[error("{0}")]
    ValidationError(String),

    // 认证错误 (401)
    #[error("{0}")]
    Unauthorized(String),

    // 内部错误 (500)
    #[error("内部服务错误")]
    InternalError(String),

    // 配置错误（启动阶段）
    #[error("配置错误: {0}")]
    ConfigError(String),
}

impl AppError {
    /// 缺少 ID 参数
    pub fn missing_id() -> Self {
        AppError::MissingParameter("ID参数缺失".to_string())
    }

    /// `{label}不存在`
    pub fn not_found(label: &str) -> Self {
        AppError::NotFound(format!("{}不存在", label))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::OK,
            AppError::MissingParameter(_) => StatusCode::OK,
            AppError::ValidationError(_) => StatusCode::OK,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::InternalError(detail) | AppError::ConfigError(detail) => {
                // 内部错误：隐藏具体细节
                tracing::error!(error_type = %self, detail = %detail, "请求处理错误");
            }
            _ => {
                tracing::warn!(error_type = %self, status = %status, "请求处理失败");
            }
        }

        let msg = match self {
            AppError::ConfigError(_) => "配置错误".to_string(),
            _ => self.to_string(),
        };
        HttpResponse::build(status).json(ApiResponse::failure(&msg))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_not_found_renders_failure_envelope() {
        let resp = AppError::not_found("相册").error_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 1);
        assert_eq!(json["msg"], "相册不存在");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = AppError::Unauthorized("未授权访问".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = AppError::InternalError("lock poisoned".to_string());
        assert_eq!(err.to_string(), "内部服务错误");
    }

    #[test]
    fn test_config_error_keeps_detail_for_startup() {
        let err = AppError::from(config::ConfigError::Message("missing port".to_string()));
        assert_eq!(err.to_string(), "配置错误: missing port");

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
