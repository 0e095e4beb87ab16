use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::PaginationInfo;
use crate::models::teacher_requests::entities::TeacherRequest;

// 教师申请分页列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher_request.ts")]
pub struct TeacherRequestListResponse {
    pub items: Vec<TeacherRequest>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationInfo,
}
