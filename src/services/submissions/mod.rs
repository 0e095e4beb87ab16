pub mod grade;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 提交/重新提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        data: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, request, assignment_id, data).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        id: i64,
        data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, id, data).await
    }

    // 教师视角：作业下全部提交
    pub async fn list_for_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_for_assignment(self, request, assignment_id).await
    }

    // 学生视角：其全部提交
    pub async fn list_for_student(
        &self,
        request: &HttpRequest,
        user_id: String,
    ) -> ActixResult<HttpResponse> {
        list::list_for_student(self, request, user_id).await
    }
}
