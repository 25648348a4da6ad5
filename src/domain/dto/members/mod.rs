//! # 회원 DTO 모듈
//!
//! 회원 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! members/
//! ├── request/    # 클라이언트 → 서버 (가입, 로그인, 토큰, 정보, 찾기, 인증)
//! └── response/   # 서버 → 클라이언트 (내 정보, 가입 결과, 인증 토큰)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
