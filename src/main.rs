//! # 메모 앱 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정(Config) 생성
//! 4. SQLite 연결 풀 생성 (DB 파일이 없으면 생성)
//! 5. 스키마 생성 (멱등)
//! 6. 라우터 조립 후 HTTP 서버 시작, Ctrl+C로 정상 종료

// ── 모듈 선언 ──
mod config;
mod db;
mod error;
mod extract;
mod models;
mod routes;

use anyhow::Result;
use config::Config;
use routes::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 memo_app, tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_app=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // 여기서 한 번만 만들고, 이후에는 값으로 전달합니다 (전역 상태 없음).
    let config = Config::from_env()?;
    tracing::info!("Starting memo app on {}", config.bind_addr());

    // ── 4단계: SQLite 연결 풀 생성 ──
    let pool = db::connect(&config).await?;
    tracing::info!("Connected to {}", config.database_url);

    // ── 5단계: 스키마 생성 ──
    db::schema::create(&pool).await?;
    tracing::info!("Database schema ready");

    // ── 6단계: 라우터 조립 및 서버 시작 ──
    let app = routes::router(AppState { pool: pool.clone() });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 진행 중인 요청이 모두 끝난 뒤 풀을 닫습니다.
    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Ctrl+C를 기다립니다.
///
/// 시그널 핸들러 등록에 실패하면 경고만 남기고 종료 신호 없이 계속 실행합니다.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down..."),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
