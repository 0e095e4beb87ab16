use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课业务实体
// 同一 (class_id, user_id) 至多一条，由唯一索引保证
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub class_id: i64,
    // 外部UID
    pub user_id: String,
    // 学习进度，0-100
    pub progress: f64,
    pub completed: bool,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
