//! # 메모 모델 정의
//!
//! 메모(Memo) 엔티티와 API가 주고받는 데이터 구조체, 그리고 입력 검증 규칙입니다.
//!
//! ## 구조체 역할
//! - `Memo`: DB의 `memos` 테이블 한 행(row). API 응답에도 그대로 쓰입니다.
//! - `NewMemo`: 아직 id가 없는, 저장 직전의 메모
//! - `CreateMemoRequest`: `POST /memos/` 요청 본문
//! - `UpdateMemoRequest`: `PUT /memos/{id}` 요청 본문 (부분 업데이트)
//! - `Patch<T>`: "보내지 않음"과 "값을 보냄"을 구분하는 필드 타입
//! - `ListParams`, `SearchParams`: 쿼리 문자열 파라미터

use crate::error::AppError;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// 제목의 최대 길이 (문자 수 기준, 바이트 아님)
pub const TITLE_MAX_CHARS: usize = 100;

/// 목록 조회의 기본 limit
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// 메모 엔티티, DB의 `memos` 테이블 한 행(row)에 대응합니다.
///
/// - `Serialize`: API 응답 JSON으로 변환
/// - `sqlx::FromRow`: SQL 결과 행을 이 구조체로 자동 매핑
///
/// 시각은 UTC이며 JSON에서는 RFC 3339 문자열이 됩니다.
/// 예: `"2026-10-16T09:30:00.123456Z"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Memo {
    /// 자동 증가 정수 id. 한 번 쓰인 값은 삭제 후에도 재사용되지 않습니다.
    pub id: i64,
    pub title: String,
    pub content: String,
    /// 생성 시각. 생성 후에는 바뀌지 않습니다.
    pub created_at: DateTime<Utc>,
    /// 마지막 수정 시각. 항상 `created_at` 이상입니다.
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// 부분 업데이트를 적용하고 `updated_at`을 갱신합니다.
    ///
    /// `Set`인 필드만 덮어쓰고 `Unset`인 필드는 그대로 둡니다.
    /// 보낸 필드가 하나도 없어도 `updated_at`은 갱신됩니다.
    pub fn apply(&mut self, patch: UpdateMemoRequest, now: DateTime<Utc>) {
        patch.title.apply_to(&mut self.title);
        patch.content.apply_to(&mut self.content);
        self.touch(now);
    }

    /// `updated_at`을 현재 시각으로 올립니다.
    ///
    /// 시계가 아직 이전 값을 넘지 못했다면 (같은 마이크로초 안의 연속 수정,
    /// 또는 시계가 뒤로 간 경우) 이전 값 + 1µs를 씁니다.
    /// 따라서 수정할 때마다 `updated_at`은 반드시 증가합니다.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let now = now.trunc_subsecs(6);
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = if now >= floor { now } else { floor };
    }
}

/// 저장 직전의 메모 (id는 DB가 부여합니다)
#[derive(Debug, Clone)]
pub struct NewMemo {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewMemo {
    /// 생성 요청으로부터 새 메모를 만듭니다.
    ///
    /// 시각은 마이크로초 단위로 잘라 둡니다.
    /// DB 왕복(저장 → 재조회) 후에도 값이 정확히 같게 유지됩니다.
    pub fn new(req: CreateMemoRequest, now: DateTime<Utc>) -> Self {
        Self {
            title: req.title,
            content: req.content,
            created_at: now.trunc_subsecs(6),
        }
    }
}

/// 메모 생성 요청, `POST /memos/`의 요청 본문
///
/// 두 필드 모두 필수입니다. 하나라도 빠지면 JSON 파싱 단계에서 400이 됩니다.
#[derive(Debug, Deserialize)]
pub struct CreateMemoRequest {
    pub title: String,
    pub content: String,
}

impl CreateMemoRequest {
    /// 타입 검사 이후의 업무 규칙을 확인합니다 (제목 길이).
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)
    }
}

/// 메모 수정 요청, `PUT /memos/{id}`의 요청 본문
///
/// 각 필드는 `Patch`이므로:
/// - `{}` → 아무 필드도 바꾸지 않음 (updated_at만 갱신)
/// - `{ "title": "새 제목" }` → 제목만 변경
/// - `{ "content": "" }` → 내용을 빈 문자열로 변경 (생략과 다름)
/// - `{ "title": null }` → 제목 유지 (생략과 같음)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMemoRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
}

impl UpdateMemoRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Patch::Set(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

/// 부분 업데이트용 필드 타입
///
/// `#[serde(default)]`와 함께 쓰면 키가 없거나 값이 `null`일 때 `Unset`,
/// 값이 있으면 `Set(값)`이 됩니다. 빈 문자열 `""`은 `Set`이므로 생략과 다릅니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// 요청에 키가 없거나 null: 기존 값 유지
    Unset,
    /// 요청에 값이 있음: 이 값으로 덮어씀
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> Patch<T> {
    /// `Set`이면 대상 값을 덮어씁니다.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

// 키가 존재할 때만 호출됩니다. (키가 없으면 serde(default)가 Unset을 넣음)
// Option<T>로 먼저 읽어 null은 None → Unset, 그 외 값은 Some → Set이 됩니다.
// null이 아닌데 T가 아닌 값(예: 숫자 제목)은 여전히 에러입니다.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // map_or(기본값, 함수): None이면 Unset, Some(v)이면 Set(v)
        Option::<T>::deserialize(deserializer)
            .map(|value| value.map_or(Patch::Unset, Patch::Set))
    }
}

/// `GET /memos/?skip=&limit=` 쿼리 파라미터
///
/// u32이므로 음수나 숫자가 아닌 값은 쿼리 파싱 단계에서 400이 됩니다.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

/// `GET /memos/search/?q=` 쿼리 파라미터
///
/// `q`는 필수입니다. 빈 문자열은 허용되며 모든 메모와 일치합니다.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// 제목 규칙: 비어 있지 않고 100자 이하
///
/// 길이는 `chars()` 기준입니다. 한글 100자도 허용됩니다.
pub fn validate_title(title: &str) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "title must be at most {} characters",
            TITLE_MAX_CHARS
        )));
    }
    Ok(())
}
