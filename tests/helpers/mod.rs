//! 测试辅助工具

#![allow(dead_code)]

use memoria::config::Settings;
use memoria::AppState;

/// 空数据的应用状态
pub fn empty_state() -> AppState {
    let mut settings = Settings::default();
    settings.seed.enabled = false;
    AppState::new(&settings)
}

/// 载入示例数据的应用状态
pub fn seeded_state() -> AppState {
    AppState::new(&Settings::default())
}

/// 用完整路由表初始化测试服务
#[macro_export]
macro_rules! test_app {
    ($state:expr) => {{
        let state = $state;
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| state.register(cfg))
                .configure(memoria::routes::configure),
        )
        .await
    }};
}

/// 断言结果是成功的
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// 断言结果是错误的
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?}", val),
            Err(e) => e,
        }
    };
}
