use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 支付成功响应，transaction_id 为合成编号
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentReceipt {
    pub transaction_id: String,
}
