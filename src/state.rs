//! 应用共享状态
//!
//! 启动时构建一次，按类型注册为 `web::Data`，处理器按需提取。

use crate::config::Settings;
use crate::models::{Album, Anniversary, Moment, Place, User, Wish};
use crate::repositories::{seed, MemoryRepository, PhotoCache};
use crate::security::JwtManager;
use crate::services::{
    AlbumService, AuthService, CrudService, DashboardService, MomentService, SystemService,
    UploadService, WishService,
};
use actix_web::web;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<CrudService<Album>>,
    pub anniversaries: Arc<CrudService<Anniversary>>,
    pub moments: Arc<CrudService<Moment>>,
    pub places: Arc<CrudService<Place>>,
    pub wishes: Arc<CrudService<Wish>>,
    pub users: Arc<CrudService<User>>,
    pub album_service: Arc<AlbumService>,
    pub moment_service: Arc<MomentService>,
    pub wish_service: Arc<WishService>,
    pub auth_service: Arc<AuthService>,
    pub system_service: Arc<SystemService>,
    pub dashboard_service: Arc<DashboardService>,
    pub upload_service: Arc<UploadService>,
}

fn repo<R: crate::models::Resource>(seeded: bool, records: fn() -> Vec<R>) -> MemoryRepository<R> {
    if seeded {
        MemoryRepository::with_records(records())
    } else {
        MemoryRepository::new()
    }
}

impl AppState {
    /// 按配置构建；`seed.enabled` 决定是否载入示例数据
    pub fn new(settings: &Settings) -> Self {
        let seeded = settings.seed.enabled;
        let sizes = &settings.pagination;

        let albums = Arc::new(CrudService::new(repo(seeded, seed::albums), sizes.albums));
        let anniversaries = Arc::new(CrudService::new(
            repo(seeded, seed::anniversaries),
            sizes.anniversaries,
        ));
        let moments = Arc::new(CrudService::new(repo(seeded, seed::moments), sizes.moments));
        let places = Arc::new(CrudService::new(repo(seeded, seed::places), sizes.places));
        let wishes = Arc::new(CrudService::new(repo(seeded, seed::wishes), sizes.wishes));
        let users = Arc::new(CrudService::new(repo(seeded, seed::users), sizes.users));

        let jwt_manager = Arc::new(JwtManager::new(&settings.auth, &Settings::jwt_secret()));
        let dashboard_service = Arc::new(DashboardService::new(
            albums.repository().clone(),
            places.repository().clone(),
            moments.repository().clone(),
            wishes.repository().clone(),
        ));

        Self {
            album_service: Arc::new(AlbumService::new(
                albums.clone(),
                PhotoCache::new(),
                sizes.photos,
            )),
            moment_service: Arc::new(MomentService::new(moments.clone())),
            wish_service: Arc::new(WishService::new(wishes.clone())),
            auth_service: Arc::new(AuthService::new(
                jwt_manager,
                &settings.auth,
                Settings::admin_password(),
            )),
            system_service: Arc::new(SystemService::new(seeded)),
            dashboard_service,
            upload_service: Arc::new(UploadService::new()),
            albums,
            anniversaries,
            moments,
            places,
            wishes,
            users,
        }
    }

    /// 注册到 actix 应用
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.albums.clone()))
            .app_data(web::Data::new(self.anniversaries.clone()))
            .app_data(web::Data::new(self.moments.clone()))
            .app_data(web::Data::new(self.places.clone()))
            .app_data(web::Data::new(self.wishes.clone()))
            .app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.album_service.clone()))
            .app_data(web::Data::new(self.moment_service.clone()))
            .app_data(web::Data::new(self.wish_service.clone()))
            .app_data(web::Data::new(self.auth_service.clone()))
            .app_data(web::Data::new(self.system_service.clone()))
            .app_data(web::Data::new(self.dashboard_service.clone()))
            .app_data(web::Data::new(self.upload_service.clone()));
    }
}
