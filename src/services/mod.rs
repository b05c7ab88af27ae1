//! 业务逻辑层（Service）

mod album_service;
mod auth_service;
mod crud_service;
mod dashboard_service;
mod moment_service;
mod system_service;
mod upload_service;
mod wish_service;

pub use album_service::AlbumService;
pub use auth_service::AuthService;
pub use crud_service::CrudService;
pub use dashboard_service::DashboardService;
pub use moment_service::MomentService;
pub use system_service::SystemService;
pub use upload_service::UploadService;
pub use wish_service::WishService;
