//! 인증 미들웨어의 동작 방식을 기술하는 타입들

/// 인증 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 라우트 접근에 요구되는 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(String),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredRole {
    /// 회원의 역할 목록이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required) => roles.iter().any(|r| r == required),
            RequiredRole::Any(required) => {
                required.iter().any(|req| roles.iter().any(|r| r == req))
            }
        }
    }
}
