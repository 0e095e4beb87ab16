use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::errors::LearnifyError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::RegisterUserRequest, responses::RegisterUserResponse},
};
use crate::utils::validate::validate_email;

pub async fn register_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: RegisterUserRequest,
) -> ActixResult<HttpResponse> {
    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let storage = service.get_storage(request);

    // 注册前的存在性检查；并发竞争由唯一索引兜底
    let existing = match storage
        .get_user_by_uid_or_email(&user_data.uid, &user_data.email)
        .await
    {
        Ok(existing) => existing,
        Err(e) => {
            error!("Error checking existing user: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check existing user",
                )),
            );
        }
    };

    if existing.is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            "User already exists",
        )));
    }

    match storage.create_user(user_data).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            RegisterUserResponse { user_id: user.id },
            "User registered successfully",
        ))),
        Err(LearnifyError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "User already exists"),
        )),
        Err(e) => {
            error!("Error registering user: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    "Error registering user",
                )),
            )
        }
    }
}
