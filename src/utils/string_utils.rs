//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 아이디 마스킹
///
/// 아이디 찾기 안내 메일에 전체 아이디가 그대로 실리지 않도록
/// 앞 3글자만 남기고 나머지를 `*`로 가립니다.
/// 3글자 이하인 아이디는 첫 글자만 남깁니다.
pub fn mask_user_id(user_id: &str) -> String {
    let chars: Vec<char> = user_id.chars().collect();
    let visible = if chars.len() > 3 { 3 } else { 1.min(chars.len()) };

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < visible { *c } else { '*' })
        .collect()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// `#[serde(deserialize_with = "deserialize_optional_string")]` 속성과 함께 사용됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_mask_user_id() {
        assert_eq!(mask_user_id("member_one"), "mem*******");
        assert_eq!(mask_user_id("abcd"), "abc*");
        assert_eq!(mask_user_id("abc"), "a**");
        assert_eq!(mask_user_id("a"), "a");
        assert_eq!(mask_user_id(""), "");
    }

    #[test]
    fn test_deserialize_optional_string() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_with_korean() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct KoreanTestStruct {
            #[serde(deserialize_with = "deserialize_optional_string")]
            korean_field: Option<String>,
        }

        let json = r#"{"korean_field": "  안녕하세요  "}"#;
        let result: KoreanTestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.korean_field, Some("안녕하세요".to_string()));
    }
}
