use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::services::SubmissionService;

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn submit_assignment(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
    data: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_assignment(&req, assignment_id.into_inner(), data.into_inner())
        .await
}

pub async fn list_for_assignment(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_for_assignment(&req, assignment_id.into_inner())
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    id: web::Path<i64>,
    data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, id.into_inner(), data.into_inner())
        .await
}

pub async fn list_for_student(
    req: HttpRequest,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_for_student(&req, user_id.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    // 作业维度：提交与教师视角列表
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/submissions").service(
            web::resource("")
                .route(web::post().to(submit_assignment))
                .route(web::get().to(list_for_assignment)),
        ),
    );
    // 提交维度：评分
    cfg.service(
        web::scope("/api/v1/submissions")
            .service(web::resource("/{id}/grade").route(web::put().to(grade_submission))),
    );
    // 学生维度：跨作业的提交列表
    cfg.service(
        web::scope("/api/v1/students")
            .service(web::resource("/{user_id}/submissions").route(web::get().to(list_for_student))),
    );
}
