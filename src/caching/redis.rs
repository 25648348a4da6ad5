//! # Redis 캐시 클라이언트 구현
//!
//! 이 모듈은 Redis를 백엔드로 하는 캐시 클라이언트를 제공합니다.
//! Spring Framework의 RedisTemplate과 유사한 역할을 수행하며,
//! 타입 안전성과 비동기 처리를 지원합니다.
//!
//! 리프레시 세션, 로그인 시도 카운터, 이메일 인증 레코드 등
//! TTL 기반 저장소가 모두 이 클라이언트를 통해 동작합니다.
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 효율적으로 처리합니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

/// Redis 캐시 클라이언트 래퍼
///
/// 이 구조체는 Redis 서버와의 상호작용을 추상화하며,
/// Spring의 `RedisTemplate`과 유사한 기능을 제공합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new().await?;
///
/// // 세션 정보 저장 (리프레시 토큰 수명만큼 TTL)
/// redis.set_with_expiry("refreshToken:user1:abc", &session, 604800).await?;
///
/// // 단일 사용 회수 (조회와 삭제가 원자적으로 수행됨)
/// let claimed: Option<RefreshTokenInfo> = redis.get_del("refreshToken:user1:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱을 지원하는 Redis 클라이언트로,
    /// 단일 TCP 연결에서 여러 동시 요청을 처리할 수 있습니다.
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 환경 변수 `REDIS_URL`에서 Redis 서버 주소를 읽어오며,
    /// 설정되지 않은 경우 기본값 `redis://localhost:6379`를 사용합니다.
    /// 생성 시 PING으로 연결 테스트를 수행합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        println!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 지정된 키에서 값을 조회합니다.
    ///
    /// JSON 으로 직렬화된 데이터를 자동으로 역직렬화하여 반환합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않음
    /// - `Err(RedisError)` - Redis 오류 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 지정된 키의 값을 조회하면서 동시에 삭제합니다 (GETDEL).
    ///
    /// 조회와 삭제가 단일 명령으로 수행되므로, 같은 키를 두 요청이
    /// 동시에 회수하려 해도 값을 받는 쪽은 최대 하나입니다.
    /// 리프레시 토큰의 단일 사용 보장에 사용됩니다.
    pub async fn get_del<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = redis::cmd("GETDEL")
            .arg(key)
            .query_async(&mut conn)
            .await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 지정된 키에 값을 저장합니다.
    ///
    /// 객체를 JSON 으로 직렬화하여 저장하며, 기존 키가 있으면 덮어씁니다.
    /// TTL이 설정되지 않으므로 영구 저장됩니다.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set(key, json).await
    }

    /// 만료 시간과 함께 값을 저장합니다.
    ///
    /// ## 사용 시나리오
    ///
    /// | 용도 | TTL |
    /// |------|-----|
    /// | 리프레시 세션 | 리프레시 토큰 수명 |
    /// | 이메일 인증 레코드 | 30분 (확인 시도 후 5분) |
    /// | 소셜 로그인 토큰 | 10분 |
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    /// 카운터를 1 증가시키고 TTL을 다시 설정합니다.
    ///
    /// INCR과 EXPIRE를 하나의 트랜잭션으로 묶어 실행하므로,
    /// 카운터가 윈도우보다 오래 살아남는 일이 없습니다.
    /// 키가 없으면 1에서 시작합니다. 증가 후의 값을 반환합니다.
    pub async fn incr_with_expiry(&self, key: &str, seconds: u64) -> Result<i64, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let (count,): (i64,) = redis::pipe()
            .atomic()
            .incr(key, 1)
            .expire(key, seconds as i64)
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(count)
    }

    /// 지정된 키를 삭제합니다.
    ///
    /// 키가 없어도 성공으로 처리합니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 여러 키를 한 번에 삭제합니다.
    ///
    /// 개별 삭제보다 효율적인 배치 삭제를 제공합니다.
    /// 빈 배열은 즉시 성공 반환합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴과 일치하는 키들을 검색합니다.
    ///
    /// KEYS 명령은 블로킹 연산이므로 세션 목록 조회처럼
    /// 키 수가 사용자당 수십 개 수준인 경우에만 사용합니다.
    ///
    /// | 패턴 | 의미 |
    /// |------|------|
    /// | `*` | 0개 이상의 임의 문자 |
    /// | `?` | 정확히 1개 문자 |
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}

impl Default for RedisClient {
    /// 기본 설정으로 RedisClient를 생성합니다.
    ///
    /// 주의: 이 메서드는 동기적이므로 실제 Redis 연결 테스트를 수행하지 않습니다.
    /// 프로덕션 환경에서는 `RedisClient::new().await`를 사용하세요.
    fn default() -> Self {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}
