use serde::Deserialize;
use ts_rs::TS;

use crate::models::resources::entities::ResourceType;

// 添加课程资料请求，title 和 url 为必填项
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub struct CreateResourceRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: ResourceType,
    pub url: String,
    pub teacher_id: String,
}
