use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherRequestService;
use crate::models::{
    ApiResponse, ErrorCode,
    teacher_requests::requests::TeacherRequestQueryParams,
};

pub async fn list_requests(
    service: &TeacherRequestService,
    request: &HttpRequest,
    query: TeacherRequestQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teacher_requests(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "查询成功"))),
        Err(e) => {
            error!("Error fetching teacher requests: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching teacher requests",
                )),
            )
        }
    }
}
