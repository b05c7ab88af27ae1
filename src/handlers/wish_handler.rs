//! 祝福审核 API 处理器

use super::crud_handler::path_id;
use crate::errors::AppError;
use crate::models::ApiResponse;
use crate::services::WishService;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// 批准祝福
pub async fn approve(
    service: web::Data<Arc<WishService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let wish = service.approve(path_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(wish, "批准成功")))
}
