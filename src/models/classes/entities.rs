use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::ApprovalStatus;

// 课程业务实体
//
// 计数器字段（total_enrollment / total_assignments / total_submissions /
// total_reviews）与 average_rating 只由工作流维护，客户端提交的更新
// 永远不会直接写入这些字段。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassOffering {
    pub id: i64,
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: ApprovalStatus,
    pub total_enrollment: i64,
    pub total_assignments: i64,
    pub total_submissions: i64,
    pub average_rating: Option<f64>,
    pub total_reviews: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
