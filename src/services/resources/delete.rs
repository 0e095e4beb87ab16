use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResourceService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_resource(
    service: &ResourceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_resource(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Resource deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ResourceNotFound,
            "Resource not found",
        ))),
        Err(e) => {
            error!("Error deleting resource: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error deleting resource",
                )),
            )
        }
    }
}
