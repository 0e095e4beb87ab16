use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::errors::LearnifyError;
use crate::models::{
    ApiResponse, ErrorCode,
    submissions::{requests::SubmitAssignmentRequest, responses::SubmitAssignmentResponse},
};

pub async fn submit_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    data: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.upsert_submission(assignment_id, data).await {
        Ok((submission, true)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubmitAssignmentResponse {
                submission_id: submission.id,
                created: true,
            },
            "Assignment submitted successfully",
        ))),
        Ok((submission, false)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmitAssignmentResponse {
                submission_id: submission.id,
                created: false,
            },
            "Submission updated successfully",
        ))),
        Err(LearnifyError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AssignmentNotFound, "Assignment not found"),
        )),
        Err(e) => {
            error!("Error submitting assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionFailed,
                    "Error submitting assignment",
                )),
            )
        }
    }
}
