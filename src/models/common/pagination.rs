use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page", deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "lenient_i64")]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 查询字符串里的数字以文本形式到达，这里同时接受两种形式
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .parse()
            .map_err(|_| Error::custom(format!("invalid integer: '{s}'"))),
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.size, 10);
    }

    #[test]
    fn test_accepts_string_numbers() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page":"3","size":"25"}"#).unwrap();
        assert_eq!(q.page, 3);
        assert_eq!(q.size, 25);
    }

    #[test]
    fn test_rejects_garbage() {
        let q: Result<PaginationQuery, _> = serde_json::from_str(r#"{"page":"abc"}"#);
        assert!(q.is_err());
    }
}
