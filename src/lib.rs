//! 회원 서비스 백엔드
//!
//! Rust 기반의 회원 및 인증 관리 서비스입니다.
//! JWT 액세스/리프레시 토큰 기반 인증, 기기별 세션 관리,
//! 이메일 인증, 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **회원 관리**: 가입, 정보 조회/수정, 계정 찾기, 탈퇴
//! - **JWT 인증**: 액세스/리프레시 토큰 쌍과 1회용 회전(rotation)
//! - **세션 관리**: Redis 기반 기기별 세션 저장과 secret 기반 폐기
//! - **이메일 인증**: 용도별 인증 세션과 횟수 제한이 있는 인증번호 확인
//! - **시도 제한**: 로그인/메일 발송에 대한 윈도우 기반 제한
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 회원 데이터 영구 저장
//! - **Redis**: 캐싱, 세션, 인증 레코드 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use member_service_backend::services::auth::AuthService;
//! use member_service_backend::services::members::MemberService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let member_service = MemberService::instance();
//! let auth_service = AuthService::instance();
//!
//! // 회원 가입 및 로그인
//! let member = member_service.sign_up(request, &ip).await?;
//! let tokens = auth_service.login(&login_request, &device).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
