//! 文件上传 API 处理器

use crate::errors::AppError;
use crate::models::{ApiResponse, UploadQuery};
use crate::services::UploadService;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// 通用上传 `?type=image|avatar|<扩展名>`
pub async fn upload(
    service: web::Data<Arc<UploadService>>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let file = service.upload(query.file_type.as_deref(), body.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(file, "上传成功")))
}

/// 图片上传
pub async fn upload_image(
    service: web::Data<Arc<UploadService>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let image = service.upload_image(body.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(image, "图片上传成功")))
}
