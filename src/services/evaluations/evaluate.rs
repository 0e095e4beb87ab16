use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::errors::LearnifyError;
use crate::models::{ApiResponse, ErrorCode, evaluations::requests::EvaluateRequest};
use crate::utils::validate::validate_rating;

pub async fn evaluate_class(
    service: &EvaluationService,
    request: &HttpRequest,
    class_id: i64,
    data: EvaluateRequest,
) -> ActixResult<HttpResponse> {
    // 评分必须落在 [1, 5]
    if let Err(msg) = validate_rating(data.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.evaluate_class(class_id, data).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Evaluation submitted successfully",
        ))),
        Err(LearnifyError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::AlreadyEvaluated,
                "You have already submitted a review for this class",
            ),
        )),
        Err(e) => {
            error!("Error submitting evaluation: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EvaluationFailed,
                    "Error submitting evaluation",
                )),
            )
        }
    }
}
