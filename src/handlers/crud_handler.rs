//! 通用资源处理器
//!
//! 相册、纪念日、地点、动态、祝福、用户共用同一组列表/创建/详情/更新/删除处理器，
//! 按资源类型单态化后注册到各自的 scope。

use crate::errors::AppError;
use crate::models::{ApiResponse, PageQuery, Resource};
use crate::services::CrudService;
use crate::utils::parse_id;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

/// 查询字符串中的 ID（`DELETE /albums?id=3`）
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// 解析路径 ID，无法解析时视为缺少参数
pub fn path_id(raw: &str) -> Result<i64, AppError> {
    parse_id(raw).ok_or_else(AppError::missing_id)
}

/// 分页列表
pub async fn list<R: Resource>(
    service: web::Data<Arc<CrudService<R>>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(page, "获取成功")))
}

/// 创建
pub async fn create<R: Resource>(
    service: web::Data<Arc<CrudService<R>>>,
    body: web::Json<R::Create>,
) -> Result<HttpResponse, AppError> {
    let record = service.create(body.into_inner()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record, "创建成功")))
}

/// 详情
pub async fn get<R: Resource>(
    service: web::Data<Arc<CrudService<R>>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path_id(&path)?;
    let record = service.get(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record, "获取成功")))
}

/// 部分更新
pub async fn update<R: Resource>(
    service: web::Data<Arc<CrudService<R>>>,
    path: web::Path<String>,
    body: web::Json<R::Update>,
) -> Result<HttpResponse, AppError> {
    let id = path_id(&path)?;
    let record = service.update(id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record, "更新成功")))
}

/// 删除
pub async fn delete<R: Resource>(
    service: web::Data<Arc<CrudService<R>>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path_id(&path)?;
    service.delete(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_message("删除成功")))
}

/// 按查询参数删除
pub async fn delete_by_query<R: Resource>(
    service: web::Data<Arc<CrudService<R>>>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError> {
    let id = query
        .id
        .as_deref()
        .and_then(parse_id)
        .ok_or_else(AppError::missing_id)?;

    service.delete(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_message("删除成功")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_id() {
        assert_eq!(path_id("12").unwrap(), 12);
        assert_eq!(path_id("7abc").unwrap(), 7);
        assert!(matches!(path_id("abc"), Err(AppError::MissingParameter(msg)) if msg == "ID参数缺失"));
    }
}
