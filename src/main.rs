//! mflix API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! `sample_mflix` 데이터베이스의 `comments`, `theaters` 컬렉션에 대한 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use mflix_api::config::{Environment, RateLimitConfig, ServerConfig};
use mflix_api::core::registry::ServiceLocator;
use mflix_api::db::Database;
use mflix_api::routes::configure_all_routes;
use mflix_api::utils::display_terminal::print_startup_banner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 mflix API 시작중...");

    // 클라이언트만 생성하고, 실제 연결은 첫 쿼리 시점에 이루어짐
    let database = Database::new().await.map_err(|e| {
        error!("❌ MongoDB 클라이언트 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let database_name = database.database_name().to_string();

    ServiceLocator::set(Arc::new(database));
    ServiceLocator::initialize_all();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(&database_name).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(database_name: &str) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let environment = Environment::current();

    print_startup_banner(&bind_address, environment.as_str(), database_name);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        per_second, burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - `.env.dev`
/// * `PROFILE=prod` - `.env.prod`
/// * 그 외 또는 미설정 - `.env`
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => eprintln!("{} 파일 로드 됨 (profile: {:?})", file, profile),
        Err(e) => eprintln!("환경 파일 로드 생략 (profile: {:?}): {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경에 따라 기본 레벨을 정합니다.
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=mflix_api::services=debug cargo run
/// ```
fn init_logging() {
    let level = Environment::current().default_log_filter();
    let default_filter = format!("{level},actix_web={level}");

    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버 origin을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
