//! 安全模块

mod jwt;

pub use jwt::{Claims, JwtManager};
