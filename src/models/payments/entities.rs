use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 支付事实记录，只追加，创建后无生命周期
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct Payment {
    pub id: i64,
    pub class_id: i64,
    pub user_id: String,
    pub amount: f64,
    // 真实结算在平台外完成，这里恒为 completed
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
