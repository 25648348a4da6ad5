//! # 소셜 교환 토큰 리포지토리 구현
//!
//! OAuth 콜백 처리기가 발급한 1회용 교환 토큰을 Redis에서 관리합니다.
//! 외부 OAuth 흐름과 이 서비스의 토큰 발급 사이를 잇는 짧은 다리입니다.

use std::sync::Arc;

use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    errors::errors::AppError,
    utils::random_utils::generate_random_string,
};

/// 교환 토큰 길이
const SOCIAL_TOKEN_LENGTH: usize = 32;
/// 교환 토큰 TTL (초)
const SOCIAL_TOKEN_TTL: u64 = 600;

/// 소셜 교환 토큰 리포지토리
///
/// 키: `socialToken:{token}` → 회원 아이디, TTL 10분.
#[repository(name = "socialtoken", collection = "social_tokens")]
pub struct SocialTokenRepository {
    redis: Arc<RedisClient>,
}

impl SocialTokenRepository {
    fn key(token: &str) -> String {
        format!("socialToken:{}", token)
    }

    /// 회원에게 새 교환 토큰 발급
    pub async fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let token = generate_random_string(SOCIAL_TOKEN_LENGTH);

        self.redis
            .set_with_expiry(&Self::key(&token), &user_id.to_string(), SOCIAL_TOKEN_TTL)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(token)
    }

    /// 교환 토큰을 원자적으로 소비하고 회원 아이디 반환
    ///
    /// GETDEL로 두 번째 사용을 차단합니다.
    pub async fn take(&self, token: &str) -> Result<Option<String>, AppError> {
        self.redis
            .get_del::<String>(&Self::key(token))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
