pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::resources::requests::CreateResourceRequest;
use crate::storage::Storage;

pub struct ResourceService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResourceService {
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

    // 添加课程资料
    pub async fn add_resource(
        &self,
        request: &HttpRequest,
        class_id: i64,
        data: CreateResourceRequest,
    ) -> ActixResult<HttpResponse> {
        create::add_resource(self, request, class_id, data).await
    }

    // 列出课程资料
    pub async fn list_resources(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_resources(self, request, class_id).await
    }

    // 删除课程资料
    pub async fn delete_resource(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_resource(self, request, id).await
    }
}
