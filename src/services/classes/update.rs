use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::UpdateClassRequest};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    if update_data.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No updatable fields provided",
        )));
    }

    let storage = service.get_storage(request);

    // 无实际变更与课程不存在的表现一致（"no changes made" 语义，对外有感）
    match storage.update_class_offering(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(class, "Class updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found or no changes made",
        ))),
        Err(e) => {
            error!("Error updating class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassUpdateFailed,
                    "Error updating class",
                )),
            )
        }
    }
}
