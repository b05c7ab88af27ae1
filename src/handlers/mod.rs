//! HTTP 处理器模块

pub mod crud_handler;

mod album_handler;
mod health_handler;
mod moment_handler;
mod system_handler;
mod upload_handler;
mod user_handler;
mod wish_handler;

pub use album_handler::*;
pub use health_handler::*;
pub use moment_handler::*;
pub use system_handler::*;
pub use upload_handler::*;
pub use user_handler::*;
pub use wish_handler::*;
