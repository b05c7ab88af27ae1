//! 工具函数模块

mod lenient;
mod parse;
mod time;

pub use lenient::lenient;
pub use parse::*;
pub use time::*;
