//! 支付记录存储操作

use super::SeaOrmStorage;
use crate::entity::payments::ActiveModel;
use crate::errors::{LearnifyError, Result};
use crate::models::payments::entities::Payment;
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 写入支付事实记录，状态恒为 completed（结算桩）
    pub async fn create_payment_impl(
        &self,
        class_id: i64,
        user_id: &str,
        amount: f64,
    ) -> Result<Payment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id.to_string()),
            amount: Set(amount),
            status: Set("completed".to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("写入支付记录失败: {e}")))?;

        Ok(result.into_payment())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;

    #[tokio::test]
    async fn test_payment_is_recorded_completed() {
        let storage = memory_storage().await;
        let payment = storage.create_payment_impl(3, "u1", 49.0).await.unwrap();
        assert_eq!(payment.status, "completed");
        assert_eq!(payment.amount, 49.0);
        assert_eq!(payment.class_id, 3);
    }
}
