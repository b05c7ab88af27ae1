//! 配置管理模块

mod settings;

pub use settings::{
	Settings,
	ServerSettings,
	LoggingSettings,
	PaginationSettings,
	AuthSettings,
	UploadSettings,
	SeedSettings,
};
