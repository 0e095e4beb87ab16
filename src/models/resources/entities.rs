use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 资料类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub enum ResourceType {
    Link,
    Document,
    Video,
    Image,
}

impl ResourceType {
    pub const LINK: &'static str = "link";
    pub const DOCUMENT: &'static str = "document";
    pub const VIDEO: &'static str = "video";
    pub const IMAGE: &'static str = "image";
}

impl Default for ResourceType {
    fn default() -> Self {
        ResourceType::Link
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的资料类型: '{s}'. 支持的类型: link, document, video, image"
            ))
        })
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Link => write!(f, "{}", ResourceType::LINK),
            ResourceType::Document => write!(f, "{}", ResourceType::DOCUMENT),
            ResourceType::Video => write!(f, "{}", ResourceType::VIDEO),
            ResourceType::Image => write!(f, "{}", ResourceType::IMAGE),
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(ResourceType::Link),
            "document" => Ok(ResourceType::Document),
            "video" => Ok(ResourceType::Video),
            "image" => Ok(ResourceType::Image),
            _ => Err(format!("Invalid resource type: {s}")),
        }
    }
}

// 课程资料业务实体，无派生计数，删除课程时不级联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub struct Resource {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: String,
    pub resource_type: ResourceType,
    pub url: String,
    pub teacher_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_round_trip() {
        for s in ["link", "document", "video", "image"] {
            let t: ResourceType = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
        assert!("archive".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_default_is_link() {
        assert_eq!(ResourceType::default(), ResourceType::Link);
    }
}
