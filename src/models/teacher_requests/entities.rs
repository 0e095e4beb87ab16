use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::ApprovalStatus;

// 教师申请业务实体
//
// details 为自由格式的申请附加字段（原样保存的 JSON），
// 审批流程只关心 instructor_email 与 status。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher_request.ts")]
pub struct TeacherRequest {
    pub id: i64,
    pub instructor_email: String,
    pub category: Option<String>,
    pub experience: Option<String>,
    #[ts(type = "Record<string, unknown> | null")]
    pub details: Option<serde_json::Value>,
    pub status: ApprovalStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
