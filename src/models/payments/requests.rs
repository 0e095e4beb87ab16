use serde::Deserialize;
use ts_rs::TS;

// 支付请求
// 卡片字段只做格式校验（支付桩），不会被持久化
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct ProcessPaymentRequest {
    pub class_id: i64,
    pub user_id: String,
    pub amount: f64,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}
