pub mod create;
pub mod get;
pub mod promote;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{
    MakeTeacherRequest, RegisterUserRequest, UpdateRoleRequest, UserQueryParams, UserSearchParams,
};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 注册用户
    pub async fn register_user(
        &self,
        request: &HttpRequest,
        user_data: RegisterUserRequest,
    ) -> ActixResult<HttpResponse> {
        create::register_user(self, request, user_data).await
    }

    // 按邮箱筛选或列出全部用户
    pub async fn list_users(
        &self,
        request: &HttpRequest,
        query: UserQueryParams,
    ) -> ActixResult<HttpResponse> {
        get::list_users(self, request, query).await
    }

    // 按名称或邮箱搜索用户
    pub async fn search_users(
        &self,
        request: &HttpRequest,
        query: UserSearchParams,
    ) -> ActixResult<HttpResponse> {
        get::search_users(self, request, query).await
    }

    // 查询外部UID对应的角色
    pub async fn get_role(&self, request: &HttpRequest, uid: String) -> ActixResult<HttpResponse> {
        get::get_role(self, request, uid).await
    }

    // 提升为管理员
    pub async fn make_admin(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        promote::make_admin(self, request, id).await
    }

    // 设置任意角色
    pub async fn update_role(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateRoleRequest,
    ) -> ActixResult<HttpResponse> {
        promote::update_role(self, request, id, update).await
    }

    // 按邮箱提升为教师
    pub async fn make_teacher(
        &self,
        request: &HttpRequest,
        data: MakeTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        promote::make_teacher(self, request, data).await
    }
}
