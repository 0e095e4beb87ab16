pub mod enroll;
pub mod list;
pub mod progress;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::UpdateProgressRequest;
use crate::models::enrollments::requests::EnrollRequest;
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 选课
    pub async fn enroll(
        &self,
        request: &HttpRequest,
        data: EnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll(self, request, data).await
    }

    // 学生的已选课程列表（含进度）
    pub async fn list_enrolled_courses(
        &self,
        request: &HttpRequest,
        user_id: String,
    ) -> ActixResult<HttpResponse> {
        list::list_enrolled_courses(self, request, user_id).await
    }

    // 更新课程学习进度
    pub async fn update_progress(
        &self,
        request: &HttpRequest,
        class_id: i64,
        data: UpdateProgressRequest,
    ) -> ActixResult<HttpResponse> {
        progress::update_progress(self, request, class_id, data).await
    }
}
