use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_u64"
    )]
    pub page: u64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_string_to_u64"
    )]
    pub limit: u64,
}

impl PaginationQuery {
    /// 规范化：页码从 1 开始，limit 限制在 [1, 100]
    pub fn normalized(&self) -> (u64, u64) {
        (self.page.max(1), self.limit.clamp(1, 100))
    }
}

// 分页响应信息，字段命名与前端约定保持一致
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub total_pages: u64,
    pub current_page: u64,
    pub total: u64,
}

// 自定义反序列化函数，查询串中的 "2" 和 2 都接受
fn deserialize_string_to_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an unsigned integer or a string containing one")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            u64::try_from(value)
                .map_err(|_| Error::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = PaginationQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
    }

    #[test]
    fn test_normalized_clamps() {
        let q = PaginationQuery { page: 0, limit: 500 };
        assert_eq!(q.normalized(), (1, 100));
    }

    #[test]
    fn test_string_values_accepted() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page":"3","limit":"25"}"#).unwrap();
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 25);
    }
}
