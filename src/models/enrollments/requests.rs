use serde::Deserialize;
use ts_rs::TS;

// 选课请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollRequest {
    pub class_id: i64,
    pub user_id: String,
}
