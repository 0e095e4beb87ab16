use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enrolled_courses(
    service: &EnrollmentService,
    request: &HttpRequest,
    user_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_enrolled_courses(&user_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "查询成功"))),
        Err(e) => {
            error!("Error fetching enrolled classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching enrolled classes",
                )),
            )
        }
    }
}
