//! Memoria - 情侣纪念册开发用 Mock API 服务
//!
//! 为前端开发提供完整的内存版后端：
//! - 相册与照片、纪念日、足迹、动态、祝福、用户的增删改查
//! - 模拟登录、系统初始化与站点设置
//! - 仪表盘统计与模拟上传

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;
pub mod utils;

pub use errors::AppError;
pub use state::AppState;
