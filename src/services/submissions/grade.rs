use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode, submissions::requests::GradeSubmissionRequest};

/// 评分一份提交
/// PUT /submissions/{id}/grade
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    id: i64,
    data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取提交与所属作业，分数必须落在 [0, max_points]
    let submission = match storage.get_submission_by_id(id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            error!("Error fetching submission: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching submission",
                )),
            );
        }
    };

    if data.grade < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeInvalid,
            "Grade must not be negative",
        )));
    }

    match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) if data.grade > assignment.max_points => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::GradeInvalid,
                format!(
                    "Grade exceeds the assignment maximum of {}",
                    assignment.max_points
                ),
            )));
        }
        Ok(_) => {} // 作业已被删除的孤儿提交仍可评分，只跳过上限校验
        Err(e) => {
            error!("Error fetching assignment for grading: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching assignment",
                )),
            );
        }
    }

    match storage.grade_submission(id, data.grade, data.feedback).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Submission graded successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            error!("Error grading submission: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GradeFailed,
                    "Error grading submission",
                )),
            )
        }
    }
}
