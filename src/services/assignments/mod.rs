pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 创建作业
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        class_id: i64,
        data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, class_id, data).await
    }

    // 获取作业详情（含实时提交数）
    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, request, id).await
    }

    // 列出课程下的作业（各自附带实时提交数）
    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, class_id).await
    }

    // 更新作业
    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, request, id, data).await
    }

    // 删除作业（级联删除其提交并回调课程计数）
    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, id).await
    }
}
