use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teacher_requests::requests::{
    SubmitTeacherRequestRequest, TeacherRequestQueryParams,
};
use crate::services::TeacherRequestService;

// 懒加载的全局 TEACHER_REQUEST_SERVICE 实例
static TEACHER_REQUEST_SERVICE: Lazy<TeacherRequestService> =
    Lazy::new(TeacherRequestService::new_lazy);

// HTTP处理程序
pub async fn submit_request(
    req: HttpRequest,
    data: web::Json<SubmitTeacherRequestRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_REQUEST_SERVICE
        .submit_request(&req, data.into_inner())
        .await
}

pub async fn list_requests(
    req: HttpRequest,
    query: web::Query<TeacherRequestQueryParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_REQUEST_SERVICE
        .list_requests(&req, query.into_inner())
        .await
}

pub async fn decide_request(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (id, action) = path.into_inner();
    TEACHER_REQUEST_SERVICE.decide_request(&req, id, action).await
}

// 配置路由
pub fn configure_teacher_requests_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher-requests")
            .service(
                web::resource("")
                    .route(web::post().to(submit_request))
                    .route(web::get().to(list_requests)),
            )
            // 审批：action 为 approve 或 reject
            .service(web::resource("/{id}/{action}").route(web::put().to(decide_request))),
    );
}
