use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{
    ApiResponse, ErrorCode,
    classes::{requests::SubmitClassRequest, responses::SubmitClassResponse},
};
use crate::utils::validate::validate_email;

pub async fn submit_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: SubmitClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_email(&class_data.instructor_email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if class_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title is required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_class_offering(class_data).await {
        Ok(class) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubmitClassResponse { class_id: class.id },
            "Class submitted successfully",
        ))),
        Err(e) => {
            error!("Error submitting class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassSubmitFailed,
                    "Error submitting class",
                )),
            )
        }
    }
}
