use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_all_reviews(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_reviews().await {
        Ok(reviews) => Ok(HttpResponse::Ok().json(ApiResponse::success(reviews, "查询成功"))),
        Err(e) => {
            error!("Error fetching all reviews: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching all reviews",
                )),
            )
        }
    }
}
