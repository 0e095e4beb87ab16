use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::evaluations::entities::Evaluation;

// 全站评价信息流：评价 + 课程上下文（内连接，课程缺失的行被整体排除）
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct ReviewWithClass {
    #[serde(flatten)]
    #[ts(flatten)]
    pub evaluation: Evaluation,
    pub class_name: String,
    pub instructor_name: Option<String>,
    pub class_image: Option<String>,
}
