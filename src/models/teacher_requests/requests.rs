use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 提交教师申请请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher_request.ts")]
pub struct SubmitTeacherRequestRequest {
    pub instructor_email: String,
    pub category: Option<String>,
    pub experience: Option<String>,
    // 其余申请字段原样保存
    #[serde(flatten)]
    #[ts(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

// 教师申请列表查询参数，筛选条件取 AND 语义，缺省即不限制
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher_request.ts")]
pub struct TeacherRequestQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<String>,
    pub experience: Option<String>,
}
