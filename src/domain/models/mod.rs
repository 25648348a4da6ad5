//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities와 달리 데이터베이스에 독립적인 개념을 담습니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: MongoDB에 직접 저장되는 객체 (`Member` 등)
//! - **정체성**: 고유한 식별자(ID)를 가짐
//!
//! ### Models (`./`)
//! - **비즈니스 로직**: 토큰 클레임, 세션 정보, 인증 상태 머신 등
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - Redis에 저장되는 값(`RefreshTokenInfo`, `EmailVerification`)도
//!   TTL과 함께 사라지는 일시적 상태이므로 여기에 속합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── token/          ← JWT 클레임과 발급 결과
//! ├── session/        ← 기기별 리프레시 토큰 세션
//! ├── verification/   ← 이메일 인증 상태 머신
//! └── auth/           ← 인증된 회원 추출자
//! ```

pub mod auth;
pub mod session;
pub mod token;
pub mod verification;

pub use auth::*;
pub use session::*;
pub use token::*;
pub use verification::*;
