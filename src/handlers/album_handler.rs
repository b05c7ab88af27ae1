//! 相册照片与封面 API 处理器

use super::crud_handler::path_id;
use crate::errors::AppError;
use crate::models::{AddPhotosRequest, ApiResponse, PageQuery, SetCoverRequest};
use crate::services::AlbumService;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// 获取相册照片
pub async fn list_photos(
    service: web::Data<Arc<AlbumService>>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let album_id = path_id(&path)?;
    let page = service.list_photos(album_id, &query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(page, "获取成功")))
}

/// 向相册添加照片
pub async fn add_photos(
    service: web::Data<Arc<AlbumService>>,
    path: web::Path<String>,
    body: web::Json<AddPhotosRequest>,
) -> Result<HttpResponse, AppError> {
    let album_id = path_id(&path)?;
    let added = service.add_photos(album_id, &body.photo_ids).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(added, "照片添加成功")))
}

/// 从相册删除照片
pub async fn remove_photo(
    service: web::Data<Arc<AlbumService>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (album_id, photo_id) = path.into_inner();
    let (album_id, photo_id) = (path_id(&album_id)?, path_id(&photo_id)?);

    service.remove_photo(album_id, photo_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_message("照片删除成功")))
}

/// 设置相册封面
pub async fn set_cover(
    service: web::Data<Arc<AlbumService>>,
    path: web::Path<String>,
    body: web::Json<SetCoverRequest>,
) -> Result<HttpResponse, AppError> {
    let album_id = path_id(&path)?;
    let photo_id = body.photo_id.ok_or_else(AppError::missing_id)?;

    let album = service.set_cover(album_id, photo_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(album, "封面设置成功")))
}
