use serde::Deserialize;
use ts_rs::TS;

fn default_max_points() -> f64 {
    100.0
}

// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default = "default_max_points")]
    pub max_points: f64,
}

// 更新作业请求：四个可编辑字段整体替换
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default = "default_max_points")]
    pub max_points: f64,
}
