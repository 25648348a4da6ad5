//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 TTL 저장소 지원과 JSON 기반 객체 직렬화를 제공합니다.
//! 리프레시 세션, 시도 카운터, 이메일 인증 레코드, 소셜 로그인 토큰이
//! 모두 이 계층 위에서 동작합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("refreshToken:user1:abc", &session, 604800).await?;
//!
//! let session: Option<RefreshTokenInfo> = cache.get("refreshToken:user1:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
