use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classes::requests::UpdateProgressRequest;
use crate::models::enrollments::requests::EnrollRequest;
use crate::services::EnrollmentService;

// 懒加载的全局 ENROLLMENT_SERVICE 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn enroll(
    req: HttpRequest,
    data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(&req, data.into_inner()).await
}

pub async fn list_enrolled_courses(
    req: HttpRequest,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrolled_courses(&req, user_id.into_inner())
        .await
}

pub async fn update_progress(
    req: HttpRequest,
    class_id: web::Path<i64>,
    data: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_progress(&req, class_id.into_inner(), data.into_inner())
        .await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .service(web::resource("").route(web::post().to(enroll)))
            .service(web::resource("/{user_id}").route(web::get().to(list_enrolled_courses))),
    );
    // 学习进度挂在课程路径下；必须先于 /api/v1/classes 的扁平 scope 注册
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/progress")
            .service(web::resource("").route(web::put().to(update_progress))),
    );
}
