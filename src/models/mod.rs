//! 数据模型模块

mod album;
mod anniversary;
mod common;
mod moment;
mod place;
mod resource;
mod system;
mod upload;
mod user;
mod wish;

pub use album::*;
pub use anniversary::*;
pub use common::*;
pub use moment::*;
pub use place::*;
pub use resource::*;
pub use system::*;
pub use upload::*;
pub use user::*;
pub use wish::*;
