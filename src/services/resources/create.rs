use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResourceService;
use crate::models::{ApiResponse, ErrorCode, resources::requests::CreateResourceRequest};

pub async fn add_resource(
    service: &ResourceService,
    request: &HttpRequest,
    class_id: i64,
    data: CreateResourceRequest,
) -> ActixResult<HttpResponse> {
    if data.title.trim().is_empty() || data.url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ResourceInvalid,
            "Title and URL are required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_resource(class_id, data).await {
        Ok(resource) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(resource, "Resource added successfully"))),
        Err(e) => {
            error!("Error adding resource: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error adding resource",
                )),
            )
        }
    }
}
