//! Memoria - 情侣纪念册开发用 Mock API 服务

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use memoria::{
    config::{LoggingSettings, Settings},
    handlers,
    middleware::RequestLogger,
    routes, AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置
    let settings = Settings::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // 初始化日志
    init_tracing(&settings.logging);
    handlers::mark_started();

    info!("💞 Memoria 服务启动中...");

    let state = AppState::new(&settings);
    info!(seeded = settings.seed.enabled, "✅ 内存数据初始化完成");

    let server_addr = settings.server_addr();
    let workers = if settings.server.workers == 0 {
        num_cpus::get()
    } else {
        settings.server.workers
    };
    let max_bytes = settings.upload.max_bytes;

    info!("🚀 服务启动在 http://{}", server_addr);
    info!("📊 工作线程数: {}", workers);

    HttpServer::new(move || {
        // 开发用 Mock 服务，允许所有来源
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .expose_headers(vec![memoria::middleware::REQUEST_ID_HEADER])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestLogger::new())
            .wrap(middleware::Compress::default())
            .app_data(web::PayloadConfig::new(max_bytes))
            .configure(|cfg| state.register(cfg))
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(&server_addr)?
    .run()
    .await
}

/// 初始化日志系统
///
/// `RUST_LOG` 优先，其次为配置中的 `logging.level`。
fn init_tracing(logging: &LoggingSettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let (json, pretty) = if logging.format == "json" {
        (Some(fmt::layer().json().with_target(true)), None)
    } else {
        (None, Some(fmt::layer().with_target(true)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .init();
}
