//! # 회원 관련 요청 DTO 모듈
//!
//! 회원 도메인의 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@Valid @RequestBody` 패턴과 같은 역할로, 클라이언트
//! JSON을 구조화된 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 길이, 패턴, 이메일 형식 (validator)
//! 3. **비즈니스 검증**: 중복 확인, 자격 증명 대조 등은 서비스 계층에서 수행
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod find_request;
pub mod info_request;
pub mod login_request;
pub mod sign_up_request;
pub mod token_request;
pub mod validators;
pub mod verification_request;

pub use find_request::{FindPasswordResetRequest, FindPasswordSendRequest, FindUserIdRequest};
pub use info_request::{
    UpdateEmailRequest, UpdateInfoRequest, UpdatePasswordRequest, WithdrawRequest,
};
pub use login_request::{LoginRequest, SocialIssueRequest, SocialLoginRequest};
pub use sign_up_request::SignUpRequest;
pub use token_request::{SecretDeleteRequest, TokenRefreshRequest};
pub use verification_request::{VerificationCheckRequest, VerificationSendRequest};
