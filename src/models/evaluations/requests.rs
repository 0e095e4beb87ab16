use serde::Deserialize;
use ts_rs::TS;

// 提交课程评价请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluateRequest {
    pub user_id: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub rating: f64,
    pub description: Option<String>,
}
