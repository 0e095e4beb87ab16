use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::ClassQueryParams};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_class_offerings(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "查询成功"))),
        Err(e) => {
            error!("Error fetching classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching classes",
                )),
            )
        }
    }
}

pub async fn list_all_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_class_offerings().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "查询成功"))),
        Err(e) => {
            error!("Error fetching all classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching all classes",
                )),
            )
        }
    }
}
