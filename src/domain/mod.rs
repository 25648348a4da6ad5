//! # Domain Layer Module
//!
//! 회원 서비스의 도메인 계층입니다. DDD(Domain Driven Design)의 구조를 따라
//! 영속 엔티티, 값 객체/비즈니스 모델, API 데이터 계약을 분리합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB에 영속되는 핵심 엔티티 (Member)
//! ├── models/     ← 값 객체와 상태 머신 (토큰, 세션, 이메일 인증)
//! └── dto/        ← API 경계의 요청/응답 계약
//! ```
//!
//! ## 설계 원칙
//!
//! 1. **작은 인터페이스**: 각 DTO는 특정 용도에만 최적화
//! 2. **불변성 우선**: 가능한 한 불변 객체로 설계
//! 3. **명시적 변환**: From/Into trait을 통한 타입 변환
//! 4. **데이터 은닉**: 비밀번호 해시와 토큰 원문은 응답 모델에서 제외

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use entities::*;
pub use models::*;
