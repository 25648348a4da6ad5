//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/    # 공통 응답 봉투 (BaseResponse)
//! └── members/   # 회원 관련 요청/응답 DTO
//! ```

pub mod common;
pub mod members;

pub use common::*;
