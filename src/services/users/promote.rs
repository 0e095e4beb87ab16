//! 角色提升
//!
//! 审批通过后的教师提升也从这里走：它是主写入之后的尽力而为
//! 副作用，失败只记录告警，不回滚审批结果。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, warn};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::UserRole,
        requests::{MakeTeacherRequest, UpdateRoleRequest},
    },
};
use crate::storage::Storage;

/// 审批通过后的教师提升副作用
///
/// 返回是否实际更新到了用户；查无此人或存储失败都不会向上传播，
/// 只留下告警日志（审批结果保持不变，窗口由运维侧对账）。
pub async fn promote_to_teacher(storage: &Arc<dyn Storage>, email: &str) -> bool {
    match storage
        .update_user_role_by_email(email, UserRole::Teacher)
        .await
    {
        Ok(true) => true,
        Ok(false) => {
            warn!("Teacher promotion skipped: no user with email {}", email);
            false
        }
        Err(e) => {
            warn!("Teacher promotion failed for {}: {}", email, e);
            false
        }
    }
}

pub async fn make_admin(
    service: &UserService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_user_role(id, UserRole::Admin).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "User role updated to admin successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found or already an admin",
        ))),
        Err(e) => {
            error!("Error updating user role: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error updating user role",
                )),
            )
        }
    }
}

pub async fn update_role(
    service: &UserService,
    request: &HttpRequest,
    id: i64,
    update: UpdateRoleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_user_role(id, update.role.clone()).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
            "User role updated to {} successfully",
            update.role
        )))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found or role already set",
        ))),
        Err(e) => {
            error!("Error updating user role: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error updating user role",
                )),
            )
        }
    }
}

pub async fn make_teacher(
    service: &UserService,
    request: &HttpRequest,
    data: MakeTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_user_role_by_email(&data.email, UserRole::Teacher)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "User role updated to teacher",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found or already a teacher",
        ))),
        Err(e) => {
            error!("Error updating role: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error updating role",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::promote_to_teacher;
    use crate::models::users::{entities::UserRole, requests::RegisterUserRequest};
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_promotion_sets_teacher_role() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        storage
            .create_user(RegisterUserRequest {
                uid: "uid-1".to_string(),
                name: "Applicant".to_string(),
                email: "applicant@test.dev".to_string(),
                photo: None,
            })
            .await
            .unwrap();

        assert!(promote_to_teacher(&storage, "applicant@test.dev").await);

        let user = storage
            .get_user_by_external_uid("uid-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, UserRole::Teacher);
    }

    #[tokio::test]
    async fn test_promotion_is_best_effort() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        // 查无此人：返回 false 而不是错误
        assert!(!promote_to_teacher(&storage, "ghost@test.dev").await);
    }
}
