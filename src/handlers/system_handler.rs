//! 系统初始化、站点设置与仪表盘 API 处理器

use crate::errors::AppError;
use crate::models::{ApiResponse, SystemInitRequest, UpdateSiteSettingsRequest};
use crate::services::{DashboardService, SystemService};
use actix_web::{web, Either, HttpResponse};
use std::sync::Arc;

/// 初始化站点（JSON 或表单）
pub async fn init(
    service: web::Data<Arc<SystemService>>,
    body: Either<web::Json<SystemInitRequest>, web::Form<SystemInitRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let data = service.init(request).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "项目初始化成功")))
}

/// 初始化状态
pub async fn init_status(
    service: web::Data<Arc<SystemService>>,
) -> Result<HttpResponse, AppError> {
    let status = service.init_status().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(status, "获取成功")))
}

pub async fn info(service: web::Data<Arc<SystemService>>) -> Result<HttpResponse, AppError> {
    let info = service.info().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(info, "获取成功")))
}

pub async fn get_site_settings(
    service: web::Data<Arc<SystemService>>,
) -> Result<HttpResponse, AppError> {
    let settings = service.site_settings().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(settings, "获取成功")))
}

pub async fn update_site_settings(
    service: web::Data<Arc<SystemService>>,
    body: web::Json<UpdateSiteSettingsRequest>,
) -> Result<HttpResponse, AppError> {
    let settings = service.update_site_settings(body.into_inner()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(settings, "设置保存成功")))
}

/// 仪表盘统计
pub async fn dashboard_stats(
    service: web::Data<Arc<DashboardService>>,
) -> Result<HttpResponse, AppError> {
    let stats = service.stats().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "获取成功")))
}
