//! # 이메일 인증 리포지토리 구현
//!
//! 진행 중인 이메일 인증 세션을 Redis에서 관리합니다.
//!
//! 키는 용도별로 분리됩니다 (`emailVerification{Purpose}:{token}`).
//! 인증 상태의 판정은 `EmailVerification` 모델이 담당하고,
//! 이 리포지토리는 저장과 TTL만 책임집니다.

use std::sync::Arc;

use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    domain::models::verification::{EmailVerification, VerificationPurpose},
    errors::errors::AppError,
};

/// 이메일 인증 세션 리포지토리
#[repository(name = "verification", collection = "verifications")]
pub struct VerificationRepository {
    redis: Arc<RedisClient>,
}

impl VerificationRepository {
    /// 인증 세션 저장
    ///
    /// 같은 키에 다시 저장하면 기존 세션을 덮어쓰고 TTL도 새로
    /// 시작합니다. 확인 시도 후의 상태 갱신도 이 메서드로 수행하며,
    /// 그때는 짧은 TTL을 전달합니다.
    pub async fn save(
        &self,
        purpose: VerificationPurpose,
        verification: &EmailVerification,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        let key = purpose.redis_key(&verification.verification_token);
        self.redis
            .set_with_expiry(&key, verification, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 인증 세션 조회
    pub async fn find(
        &self,
        purpose: VerificationPurpose,
        token: &str,
    ) -> Result<Option<EmailVerification>, AppError> {
        let key = purpose.redis_key(token);
        self.redis
            .get::<EmailVerification>(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 인증 세션 삭제 (최종 소비 시점)
    ///
    /// 가입 완료, 비밀번호 재설정 완료, 이메일 변경 완료 시 호출되어
    /// 같은 토큰의 재사용을 차단합니다.
    pub async fn delete(
        &self,
        purpose: VerificationPurpose,
        token: &str,
    ) -> Result<(), AppError> {
        let key = purpose.redis_key(token);
        self.redis
            .del(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
