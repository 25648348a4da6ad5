//! # 회원 관련 응답 DTO 모듈
//!
//! 회원 도메인의 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! 민감한 정보(비밀번호 해시, 내부 ID, 감사 IP)는 응답에서 제외합니다.

pub mod member_response;

pub use member_response::{
    MemberInfoResponse, SignUpResponse, SocialTokenResponse, VerificationSendResponse,
};
