use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, common::status::DecisionAction};
use crate::services::users::promote::promote_to_teacher;

pub async fn decide_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
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

    let decided = match storage.decide_class_offering(class_id, action).await {
        Ok(decided) => decided,
        Err(e) => {
            error!("Error deciding class: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Error processing class: {e}"),
                )),
            );
        }
    };

    let Some(decided) = decided else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found or already processed",
        )));
    };

    // 课程过审意味着其讲师获得教师角色；失败只告警，不回滚审批
    if action == DecisionAction::Approve {
        promote_to_teacher(&storage, &decided.instructor_email).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
        "Class {} successfully",
        action.target_status()
    ))))
}
