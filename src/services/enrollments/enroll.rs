use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::errors::LearnifyError;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{requests::EnrollRequest, responses::EnrollResponse},
};

pub async fn enroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    data: EnrollRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.enroll(data.class_id, &data.user_id).await {
        Ok(enrollment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            EnrollResponse {
                enrollment_id: enrollment.id,
            },
            "Enrollment successful",
        ))),
        Err(LearnifyError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "User already enrolled in this class",
            ),
        )),
        Err(e) => {
            error!("Error enrolling user: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    "Enrollment failed",
                )),
            )
        }
    }
}
