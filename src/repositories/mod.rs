//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! 회원 영속 데이터는 MongoDB에, 세션/인증/시도 횟수처럼 수명이 있는
//! 상태는 Redis에 저장합니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 메모리 효율적인 인스턴스 관리
//! - 자동 의존성 주입을 통한 간편한 설정
//! - TTL 기반의 자동 만료 (세션, 인증, 카운터)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::members::MemberRepository;
//!
//! let member_repo = MemberRepository::instance();
//! let member = member_repo.find_by_user_id("member_one").await?;
//! ```

pub mod attempts;
pub mod members;
pub mod sessions;
pub mod social;
pub mod verifications;
