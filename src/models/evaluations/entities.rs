use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程评价业务实体
// 同一 (class_id, user_id) 至多一条，由唯一索引保证
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub class_id: i64,
    pub user_id: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    // 评分，1-5
    pub rating: f64,
    pub description: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
