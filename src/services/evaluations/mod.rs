pub mod evaluate;
pub mod reviews;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::EvaluateRequest;
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
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

    // 评价课程
    pub async fn evaluate_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        data: EvaluateRequest,
    ) -> ActixResult<HttpResponse> {
        evaluate::evaluate_class(self, request, class_id, data).await
    }

    // 全站评价信息流
    pub async fn list_all_reviews(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        reviews::list_all_reviews(self, request).await
    }
}
