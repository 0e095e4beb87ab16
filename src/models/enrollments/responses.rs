use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::classes::entities::ClassOffering;

// 选课成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollResponse {
    pub enrollment_id: i64,
}

// 已选课程：课程详情与选课记录中的进度合并后的视图
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrolledCourse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: ClassOffering,
    pub progress: f64,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
