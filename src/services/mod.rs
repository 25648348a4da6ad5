//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 회원 관리와 인증/세션/이메일 인증 기능을 담당합니다.
//!
//! # Features
//!
//! - 회원 생명주기 관리 (가입, 조회, 수정, 탈퇴)
//! - JWT 토큰 기반 인증과 기기별 세션 관리
//! - 이메일 인증 및 발송
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{members::MemberService, auth::AuthService};
//!
//! let member_service = MemberService::instance();
//! let auth_service = AuthService::instance();
//! ```

pub mod auth;
pub mod mail;
pub mod members;
pub mod tokens;
pub mod verification;
