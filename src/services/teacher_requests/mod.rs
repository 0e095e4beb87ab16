pub mod decide;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teacher_requests::requests::{
    SubmitTeacherRequestRequest, TeacherRequestQueryParams,
};
use crate::storage::Storage;

pub struct TeacherRequestService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherRequestService {
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

    // 提交教师申请
    pub async fn submit_request(
        &self,
        request: &HttpRequest,
        data: SubmitTeacherRequestRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_request(self, request, data).await
    }

    // 分页列出教师申请
    pub async fn list_requests(
        &self,
        request: &HttpRequest,
        query: TeacherRequestQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_requests(self, request, query).await
    }

    // 审批教师申请（approve 附带教师提升副作用）
    pub async fn decide_request(
        &self,
        request: &HttpRequest,
        id: i64,
        action: String,
    ) -> ActixResult<HttpResponse> {
        decide::decide_request(self, request, id, action).await
    }
}
