use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        requests::{UserQueryParams, UserSearchParams},
        responses::RoleResponse,
    },
};

// 按邮箱筛选，缺省时返回全部用户
pub async fn list_users(
    service: &UserService,
    request: &HttpRequest,
    query: UserQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match query.email {
        Some(ref email) => storage.get_users_by_email(email).await,
        None => storage.list_users().await,
    };

    match result {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(users, "查询成功"))),
        Err(e) => {
            error!("Error fetching users: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching users",
                )),
            )
        }
    }
}

pub async fn search_users(
    service: &UserService,
    request: &HttpRequest,
    query: UserSearchParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.search_users(&query.term).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(users, "查询成功"))),
        Err(e) => {
            error!("Error searching users: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error searching users",
                )),
            )
        }
    }
}

// 未设置角色时按 student 处理
pub async fn get_role(
    service: &UserService,
    request: &HttpRequest,
    uid: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_external_uid(&uid).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RoleResponse {
                role: user.role.to_string(),
            },
            "查询成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("Error fetching user role: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching user role",
                )),
            )
        }
    }
}
