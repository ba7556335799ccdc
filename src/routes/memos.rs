//! # 메모(Memo) 라우트 핸들러
//!
//! 메모의 CRUD(생성/조회/수정/삭제)와 검색을 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `POST   /memos/`             → 새 메모 생성 (`/memos`도 같음)
//! - `GET    /memos/?skip=&limit=` → 메모 목록 (id 순)
//! - `GET    /memos/search/?q=`    → 제목/내용 부분 문자열 검색
//! - `GET    /memos/{id}`          → 단일 메모 조회
//! - `PUT    /memos/{id}`          → 메모 수정 (부분 업데이트)
//! - `DELETE /memos/{id}`          → 메모 삭제
//!
//! ## 요청 처리 흐름
//! 모든 핸들러는 같은 모양입니다:
//! 1. 추출자(`AppJson`, `AppQuery`, `AppPath`)와 `validate()`로 입력 검증 (실패 시 400, DB 접근 없음)
//! 2. `Session::begin()`(읽기) 또는 `Session::begin_write()`(쓰기)로 요청 전용 트랜잭션 시작
//! 3. 논리적 작업 하나 수행
//! 4. 쓰기 작업이면 `commit()`, 읽기 작업이면 그냥 drop
//!
//! 2~4 사이 어디서 `?`로 빠져나가도 세션이 drop되며 연결이 반납됩니다.

// ── 의존성 가져오기 ──
use crate::{
    db::Session,                           // 요청 단위 트랜잭션 핸들
    error::AppError,                       // 에러 타입 (자동으로 HTTP 에러 응답으로 변환됨)
    extract::{AppJson, AppPath, AppQuery}, // 거부 시 400을 돌려주는 추출자 래퍼
    models::*,                             // 요청/응답 구조체들 (Memo, CreateMemoRequest 등)
    routes::AppState,                      // 애플리케이션 공유 상태 (DB 풀)
};
use axum::{extract::State, Json};
use chrono::Utc; // 현재 시각(UTC)을 얻기 위한 chrono 타입
use serde_json::{json, Value};

/// 삭제 성공 시 응답 메시지
pub const DELETED_MESSAGE: &str = "Memo deleted";

/// `POST /memos/`: 새 메모를 생성합니다.
///
/// 저장 후 같은 트랜잭션 안에서 다시 읽어(refresh) DB가 부여한 id를 포함한
/// 완전한 레코드를 반환합니다.
pub async fn create_memo(
    State(state): State<AppState>,
    // AppJson(req): 요청 본문을 CreateMemoRequest로 파싱합니다.
    // title이나 content가 빠지면 핸들러 본문에 들어오기 전에 400으로 끝납니다.
    AppJson(req): AppJson<CreateMemoRequest>,
) -> Result<Json<Memo>, AppError> {
    // 타입 검사를 통과한 뒤의 업무 규칙(제목 길이) 확인
    // `?`: Err이면 즉시 반환합니다. 아직 세션을 열기 전이므로 DB에 닿지 않습니다.
    req.validate()?;

    // 쓰기 요청이므로 시작부터 쓰기 잠금을 잡는 세션을 엽니다.
    let mut session = Session::begin_write(&state.pool).await?;
    // NewMemo::new(req, ...): req의 소유권이 NewMemo로 이동(move)합니다.
    // 이후로 req는 사용할 수 없지만, 필요한 값은 모두 NewMemo에 들어 있습니다.
    let id = session.add(&NewMemo::new(req, Utc::now())).await?;
    let memo = session.refresh(id).await?;
    // commit(self): 세션을 소비(consume)하므로 이 줄 이후 session은 사용할 수 없습니다.
    session.commit().await?;

    // 구조화된 로그: id = memo.id는 메시지와 별도의 필드로 기록됩니다.
    tracing::info!(id = memo.id, "Created memo");
    Ok(Json(memo))
}

/// `GET /memos/?skip=0&limit=100`: 메모 목록을 id 순서로 조회합니다.
///
/// 두 파라미터 모두 생략 가능합니다 (기본값 skip=0, limit=100).
pub async fn list_memos(
    State(state): State<AppState>,
    // AppQuery(params): URL의 `?skip=..&limit=..`를 ListParams로 파싱합니다.
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<Vec<Memo>>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    // ListParams는 Copy이므로 필드를 꺼내 써도 params가 이동하지 않습니다.
    let memos = session.list(params.skip, params.limit).await?;
    // 읽기 전용이므로 commit하지 않습니다. 함수가 끝나면 session이 drop되어 연결이 반납됩니다.
    Ok(Json(memos))
}

/// `GET /memos/{id}`: 단일 메모를 조회합니다.
pub async fn get_memo(
    State(state): State<AppState>,
    // AppPath(id): URL의 `{id}` 부분을 i64로 파싱합니다.
    // `/memos/abc`처럼 숫자가 아니면 400이 됩니다.
    AppPath(id): AppPath<i64>,
) -> Result<Json<Memo>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    let memo = session
        .get(id)
        .await?
        // .ok_or(): Option<Memo>을 Result<Memo, AppError>로 변환합니다.
        // None(메모 없음)이면 NotFound → HTTP 404
        .ok_or(AppError::NotFound)?;
    Ok(Json(memo))
}

/// `PUT /memos/{id}`: 메모를 부분 수정합니다.
///
/// 보낸 필드만 덮어쓰고, 보낸 필드가 없어도 `updated_at`은 항상 갱신됩니다.
/// 동시에 같은 메모를 수정하면 쓰기 세션이 차례로 실행되고, 마지막으로 커밋된 쪽이 남습니다.
pub async fn update_memo(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(patch): AppJson<UpdateMemoRequest>,
) -> Result<Json<Memo>, AppError> {
    patch.validate()?;

    // 조회 후 수정하는 흐름이므로 조회 전에 쓰기 잠금을 잡아 둡니다. (Session::begin_write 참고)
    let mut session = Session::begin_write(&state.pool).await?;
    // `let mut memo`: 아래에서 apply()로 값을 바꾸므로 가변(mutable) 바인딩이 필요합니다.
    let mut memo = session.get(id).await?.ok_or(AppError::NotFound)?;

    memo.apply(patch, Utc::now());
    session.save(&memo).await?;
    // 같은 이름으로 다시 바인딩(shadowing)합니다. 이제 memo는 DB에서 다시 읽은 값입니다.
    let memo = session.refresh(id).await?;
    session.commit().await?;

    tracing::info!(id, "Updated memo");
    Ok(Json(memo))
}

/// `DELETE /memos/{id}`: 메모를 삭제합니다.
///
/// 성공 시 `{ "message": "Memo deleted" }`
pub async fn delete_memo(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Value>, AppError> {
    let mut session = Session::begin_write(&state.pool).await?;
    let memo = session.get(id).await?.ok_or(AppError::NotFound)?;

    // delete()는 삭제된 행이 있으면 true를 반환합니다.
    if !session.delete(memo.id).await? {
        return Err(AppError::NotFound);
    }
    session.commit().await?;

    tracing::info!(id, "Deleted memo");
    Ok(Json(json!({ "message": DELETED_MESSAGE })))
}

/// `GET /memos/search/?q=키워드`: 제목 또는 내용에 키워드가 포함된 메모를 찾습니다.
///
/// 대소문자를 구분하는 단순 포함 검색입니다. 순위 매기기는 없고 id 순으로 반환합니다.
pub async fn search_memos(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Json<Vec<Memo>>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    // &params.q: String의 참조(&String → &str)를 넘겨 소유권은 그대로 둡니다.
    let memos = session.search(&params.q).await?;
    // %params.q: Display 형식으로 필드를 기록합니다 (Debug 형식이면 ?를 씁니다).
    tracing::debug!(q = %params.q, hits = memos.len(), "Searched memos");
    Ok(Json(memos))
}
