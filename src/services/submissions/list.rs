use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};

// 教师视角：作业下全部提交，按提交时间倒序
pub async fn list_for_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submissions_for_assignment(assignment_id).await {
        Ok(submissions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功")))
        }
        Err(e) => {
            error!("Error fetching submissions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching submissions",
                )),
            )
        }
    }
}

// 学生视角：其全部提交，按提交时间倒序
pub async fn list_for_student(
    service: &SubmissionService,
    request: &HttpRequest,
    user_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submissions_for_student(&user_id).await {
        Ok(submissions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功")))
        }
        Err(e) => {
            error!("Error fetching student submissions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching student submissions",
                )),
            )
        }
    }
}
