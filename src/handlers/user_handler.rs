//! 登录与当前用户 API 处理器

use crate::errors::AppError;
use crate::models::{ApiResponse, LoginRequest};
use crate::services::AuthService;
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use std::sync::Arc;

/// 从 Authorization 头中提取 Bearer 令牌
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// 用户登录
pub async fn login(
    service: web::Data<Arc<AuthService>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = service.login(&body)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(token, "登录成功")))
}

/// 获取当前登录用户
pub async fn current_user(
    req: HttpRequest,
    service: web::Data<Arc<AuthService>>,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req)
        .ok_or_else(|| AppError::Unauthorized("未授权访问".to_string()))?;

    let user = service.current_user(token)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "查询成功")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def"));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic abc"))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        assert_eq!(bearer_token(&TestRequest::default().to_http_request()), None);
    }
}
