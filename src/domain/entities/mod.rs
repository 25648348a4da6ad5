//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## MongoDB 통합
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **데이터 일관성**: 유일성 제약(user_id, email, nick)은 리포지토리에서 검사

pub mod members;

pub use members::*;
