pub mod process;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::payments::requests::ProcessPaymentRequest;
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaymentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 处理支付（结算桩：只做格式校验并记录事实）
    pub async fn process_payment(
        &self,
        request: &HttpRequest,
        data: ProcessPaymentRequest,
    ) -> ActixResult<HttpResponse> {
        process::process_payment(self, request, data).await
    }
}
