use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResourceService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_resources(
    service: &ResourceService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_resources(class_id).await {
        Ok(resources) => Ok(HttpResponse::Ok().json(ApiResponse::success(resources, "查询成功"))),
        Err(e) => {
            error!("Error fetching resources: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching resources",
                )),
            )
        }
    }
}
