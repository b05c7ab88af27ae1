//! 路由配置模块

use crate::errors::AppError;
use crate::handlers::{self, crud_handler};
use crate::models::{Album, Anniversary, Moment, Place, Resource, User, Wish};
use actix_web::{error, web, HttpRequest};

/// 资源的标准 CRUD 路由
///
/// - `GET    /`       分页列表
/// - `POST   /`       创建
/// - `DELETE /?id=`   按查询参数删除
/// - `GET    /{id}`   详情
/// - `PUT    /{id}`   部分更新
/// - `DELETE /{id}`   删除
fn crud_scope<R: Resource>(path: &str) -> actix_web::Scope {
    web::scope(path)
        .route("", web::get().to(crud_handler::list::<R>))
        .route("", web::post().to(crud_handler::create::<R>))
        .route("", web::delete().to(crud_handler::delete_by_query::<R>))
        .route("/{id}", web::get().to(crud_handler::get::<R>))
        .route("/{id}", web::put().to(crud_handler::update::<R>))
        .route("/{id}", web::delete().to(crud_handler::delete::<R>))
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("请求体解析失败: {}", err);
    AppError::ValidationError(format!("请求体格式错误: {}", err)).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("查询参数解析失败: {}", err);
    AppError::ValidationError(format!("查询参数格式错误: {}", err)).into()
}

fn form_error(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("表单格式错误: {}", err)).into()
}

/// 配置所有路由
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error))
    .app_data(web::FormConfig::default().error_handler(form_error))
    // 健康检查路由
    .service(
        web::scope("/health")
            .route("", web::get().to(handlers::health))
            .route("/live", web::get().to(handlers::live)),
    )
    // API v1 路由
    .service(
        web::scope("/api/v1")
            // 相册（含照片与封面）
            .service(
                crud_scope::<Album>("/albums")
                    .route("/{id}/photos", web::get().to(handlers::list_photos))
                    .route("/{id}/photos", web::post().to(handlers::add_photos))
                    .route(
                        "/{album_id}/photos/{photo_id}",
                        web::delete().to(handlers::remove_photo),
                    )
                    .route("/{id}/cover", web::put().to(handlers::set_cover)),
            )
            .service(crud_scope::<Anniversary>("/anniversaries"))
            .service(crud_scope::<Place>("/places"))
            .service(
                crud_scope::<Moment>("/moments")
                    .route("/{id}/like", web::post().to(handlers::like))
                    .route("/{id}/public", web::put().to(handlers::set_public)),
            )
            .service(
                crud_scope::<Wish>("/wishes")
                    .route("/{id}/approve", web::put().to(handlers::approve)),
            )
            .service(crud_scope::<User>("/users"))
            // 登录与当前用户
            .service(
                web::scope("/user")
                    .route("", web::get().to(handlers::current_user))
                    .route("/token", web::post().to(handlers::login)),
            )
            // 系统
            .service(
                web::scope("/system")
                    .route("/init", web::get().to(handlers::init_status))
                    .route("/init", web::post().to(handlers::init))
                    .route("/info", web::get().to(handlers::info))
                    .route("/settings/site", web::get().to(handlers::get_site_settings))
                    .route("/settings/site", web::post().to(handlers::update_site_settings))
                    .route("/dashboard/stats", web::get().to(handlers::dashboard_stats)),
            )
            // 上传
            .service(
                web::scope("/upload")
                    .route("", web::post().to(handlers::upload))
                    .route("/image", web::post().to(handlers::upload_image)),
            ),
    );
}
