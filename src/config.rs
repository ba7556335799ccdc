//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (기본값: `sqlite:memo_app.db`)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 최대 크기 (기본값: 5)
//! - `HOST`: 서버 바인딩 주소 (기본값: `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값: 8000)
//!
//! 설정은 `main()`에서 한 번만 만들어지고, 전역 변수 없이
//! 필요한 곳(연결 풀 생성, 서버 바인딩)에 값으로 전달됩니다.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// 설정 로딩 중 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 환경변수 값이 기대한 형식으로 파싱되지 않음
    /// 예: `PORT=abc`
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// 애플리케이션 전체 설정을 담는 구조체
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:memo_app.db")
    /// 파일이 없으면 시작 시 자동으로 생성됩니다.
    pub database_url: String,
    /// 연결 풀이 유지할 최대 연결 수
    pub max_connections: u32,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:memo_app.db".to_string(),
            max_connections: 5,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 환경변수가 하나도 없어도 동작합니다.
    /// 단, 값이 있는데 숫자로 파싱되지 않으면 조용히 기본값으로 넘어가지 않고
    /// `ConfigError::Invalid`를 반환합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 환경변수 조회 함수를 주입받아 설정을 만듭니다.
    ///
    /// `from_env()`는 실제 환경변수를, 테스트는 HashMap 기반 클로저를 넘깁니다.
    /// 테스트가 프로세스 전역 환경변수를 건드리지 않게 하기 위한 분리입니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.max_connections),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
        })
    }

    /// 서버 바인딩 주소 ("host:port")
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 숫자형 환경변수를 파싱합니다.
///
/// - 변수가 없으면 `Ok(None)` (호출자가 기본값 사용)
/// - 파싱에 성공하면 `Ok(Some(값))`
/// - 파싱에 실패하면 `Err(ConfigError::Invalid)`
fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, "sqlite:memo_app.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:/tmp/other.db"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("HOST", "127.0.0.1"),
            ("PORT", " 9000 "),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite:/tmp/other.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
