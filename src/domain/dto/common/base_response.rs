//! 공통 응답 봉투
//!
//! 모든 API 응답이 공유하는 최상위 JSON 구조입니다.
//! 클라이언트는 HTTP 상태 코드와 별개로 `status_code`와
//! `status_message`로 처리 결과를 판별합니다.

use serde::{Deserialize, Serialize};

/// 표준 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    pub status_code: u16,
    pub status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 데이터를 포함한 성공 응답
    pub fn ok(data: T) -> Self {
        Self {
            status_code: 200,
            status_message: "성공".to_string(),
            data: Some(data),
        }
    }

    /// 메시지만 담은 성공 응답
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            status_message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_includes_data() {
        let res = BaseResponse::ok(json!({"user_id": "member_one"}));
        let value = serde_json::to_value(&res).unwrap();

        assert_eq!(value["status_code"], 200);
        assert_eq!(value["data"]["user_id"], "member_one");
    }

    #[test]
    fn test_message_only_omits_data_field() {
        let res: BaseResponse<serde_json::Value> = BaseResponse::ok_message("처리되었습니다");
        let value = serde_json::to_value(&res).unwrap();

        assert!(value.get("data").is_none());
        assert_eq!(value["status_message"], "처리되었습니다");
    }
}
