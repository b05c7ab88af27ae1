//! 动态点赞与公开状态 API 处理器

use super::crud_handler::path_id;
use crate::errors::AppError;
use crate::models::{ApiResponse, UpdatePublicRequest};
use crate::services::MomentService;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// 点赞
pub async fn like(
    service: web::Data<Arc<MomentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let moment = service.like(path_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(moment, "更新成功")))
}

/// 设置公开状态
pub async fn set_public(
    service: web::Data<Arc<MomentService>>,
    path: web::Path<String>,
    body: web::Json<UpdatePublicRequest>,
) -> Result<HttpResponse, AppError> {
    let moment = service.set_public(path_id(&path)?, body.is_public).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(moment, "更新成功")))
}
