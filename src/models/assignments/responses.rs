use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;

// 创建作业成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentResponse {
    pub assignment_id: i64,
}

// 作业 + 实时统计的提交数
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentWithCount {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub submission_count: u64,
}
