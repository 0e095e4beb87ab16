use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assignments_with_counts(class_id).await {
        Ok(assignments) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignments, "查询成功")))
        }
        Err(e) => {
            error!("Error fetching assignments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching assignments",
                )),
            )
        }
    }
}
