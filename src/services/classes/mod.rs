pub mod create;
pub mod decide;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{ClassQueryParams, SubmitClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 提交课程（进入审批流程）
    pub async fn submit_class(
        &self,
        request: &HttpRequest,
        class_data: SubmitClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::submit_class(self, request, class_data).await
    }

    // 分页列出课程
    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, query).await
    }

    // 列出全部课程（管理后台）
    pub async fn list_all_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_all_classes(self, request).await
    }

    // 根据课程 ID 获取课程详情
    pub async fn get_class(&self, request: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        get::get_class(self, request, class_id).await
    }

    // 更新课程信息
    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, request, class_id, update_data).await
    }

    // 删除课程
    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }

    // 审批课程（approve 附带教师提升副作用）
    pub async fn decide_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        action: String,
    ) -> ActixResult<HttpResponse> {
        decide::decide_class(self, request, class_id, action).await
    }
}
