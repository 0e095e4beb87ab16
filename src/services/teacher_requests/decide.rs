use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherRequestService;
use crate::models::{ApiResponse, ErrorCode, common::status::DecisionAction};
use crate::services::users::promote::promote_to_teacher;

pub async fn decide_request(
    service: &TeacherRequestService,
    request: &HttpRequest,
    id: i64,
    action: String,
) -> ActixResult<HttpResponse> {
    let action: DecisionAction = match action.parse() {
        Ok(action) => action,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidAction, msg)));
        }
    };

    let storage = service.get_storage(request);

    // 条件更新只命中 pending 记录；终态与不存在统一表现为 NotFound
    let decided = match storage.decide_teacher_request(id, action).await {
        Ok(decided) => decided,
        Err(e) => {
            error!("Error deciding teacher request: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Error processing teacher request: {e}"),
                )),
            );
        }
    };

    let Some(decided) = decided else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherRequestNotFound,
            "Teacher request not found or already processed",
        )));
    };

    // 审批通过后的教师提升：主写入已提交，失败不回滚
    if action == DecisionAction::Approve {
        promote_to_teacher(&storage, &decided.instructor_email).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
        "Teacher request {} successfully",
        action.target_status()
    ))))
}

#[cfg(test)]
mod tests {
    use super::decide_request;
    use crate::models::teacher_requests::requests::SubmitTeacherRequestRequest;
    use crate::models::users::{entities::UserRole, requests::RegisterUserRequest};
    use crate::services::TeacherRequestService;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use actix_web::{http::StatusCode, test::TestRequest, web};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_approve_promotes_applicant_to_teacher() {
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
        let created = storage
            .create_teacher_request(SubmitTeacherRequestRequest {
                instructor_email: "applicant@test.dev".to_string(),
                category: None,
                experience: None,
                details: serde_json::Map::new(),
            })
            .await
            .unwrap();

        let service = TeacherRequestService::new_lazy();
        let req = TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();

        let resp = decide_request(&service, &req, created.id, "approve".to_string())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // 审批通过的副作用：申请人角色被提升
        let user = storage
            .get_user_by_external_uid("uid-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, UserRole::Teacher);

        // 终态后的再次审批：NotFound
        let resp = decide_request(&service, &req, created.id, "approve".to_string())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // 无效动作：BadRequest
        let resp = decide_request(&service, &req, created.id, "escalate".to_string())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
