use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::classes::entities::ClassOffering;
use crate::models::common::PaginationInfo;

// 课程分页列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListResponse {
    pub items: Vec<ClassOffering>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationInfo,
}

// 提交课程成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct SubmitClassResponse {
    pub class_id: i64,
}
