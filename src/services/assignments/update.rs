use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::UpdateAssignmentRequest};

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: i64,
    data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title is required",
        )));
    }

    if data.max_points <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "max_points must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_assignment(id, data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found or no changes made",
        ))),
        Err(e) => {
            error!("Error updating assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentUpdateFailed,
                    "Error updating assignment",
                )),
            )
        }
    }
}
