//! # Configuration Module
//!
//! 회원 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT, 시도 제한, 이메일 인증 정책 설정
//! - [`mail_config`] - 메일 발송 제공자 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정 (역할별로 독립된 키)
//! export JWT_ACCESS_SECRET="base64-key"
//! export JWT_REFRESH_SECRET="base64-key"
//!
//! # 환경/보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod mail_config;

pub use data_config::*;
pub use auth_config::*;
pub use mail_config::*;
