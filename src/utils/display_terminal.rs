//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작과 레지스트리 초기화 과정을 표준 출력에 표시합니다.
//! 요청 처리 중 로그는 `log` 매크로를 사용하고, 이 모듈은 시작 단계에서만 씁니다.

/// 박스 내부 폭 (문자 수)
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싼 제목 문자열을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);

    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH - 1
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// `→ Step 1: Creating Repository instances`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Repository instances created (2 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓴 하위 작업 상태
///
/// ```text
///    ├─ comment_repository: ✓ Created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 등록 정보 캐시 구성 완료
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// 서버 시작 배너 문자열
pub fn startup_banner(bind_address: &str, environment: &str, database_name: &str) -> String {
    [
        boxed_title("🎬 MFLIX API"),
        format!("   🌐 Listening: http://{}", bind_address),
        format!("   🏷️ Environment: {}", environment),
        format!("   🗄️ Database: {}", database_name),
        "   📍 Endpoints: /api/movies/{idMovie}/comments, /api/theaters, /health".to_string(),
    ]
    .join("\n")
}

pub fn print_startup_banner(bind_address: &str, environment: &str, database_name: &str) {
    println!("{}", startup_banner(bind_address, environment, database_name));
}
