use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{requests::CreateAssignmentRequest, responses::CreateAssignmentResponse},
};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    data: CreateAssignmentRequest,
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

    match storage.create_assignment(class_id, data).await {
        Ok(assignment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CreateAssignmentResponse {
                assignment_id: assignment.id,
            },
            "Assignment created successfully",
        ))),
        Err(e) => {
            error!("Error creating assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentCreateFailed,
                    "Error creating assignment",
                )),
            )
        }
    }
}
