use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherRequestService;
use crate::models::{
    ApiResponse, ErrorCode,
    teacher_requests::requests::SubmitTeacherRequestRequest,
};
use crate::utils::validate::validate_email;

pub async fn submit_request(
    service: &TeacherRequestService,
    request: &HttpRequest,
    data: SubmitTeacherRequestRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_email(&data.instructor_email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_teacher_request(data).await {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Teacher request submitted successfully",
        ))),
        Err(e) => {
            error!("Error submitting teacher request: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherRequestSubmitFailed,
                    "Error submitting teacher request",
                )),
            )
        }
    }
}
