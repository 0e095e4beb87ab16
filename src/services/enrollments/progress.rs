use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::UpdateProgressRequest};
use crate::utils::validate::validate_progress;

pub async fn update_progress(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
    data: UpdateProgressRequest,
) -> ActixResult<HttpResponse> {
    // 进度必须落在 [0, 100]
    if let Err(msg) = validate_progress(data.progress) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ProgressInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_progress(class_id, data.progress).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Class progress updated successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Error updating class progress: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error updating class progress",
                )),
            )
        }
    }
}
