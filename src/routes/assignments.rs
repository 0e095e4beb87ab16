use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::services::AssignmentService;

// 懒加载的全局 ASSIGNMENT_SERVICE 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// HTTP处理程序
pub async fn create_assignment(
    req: HttpRequest,
    class_id: web::Path<i64>,
    data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, class_id.into_inner(), data.into_inner())
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, class_id.into_inner())
        .await
}

pub async fn get_assignment(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, id.into_inner()).await
}

pub async fn update_assignment(
    req: HttpRequest,
    id: web::Path<i64>,
    data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, id.into_inner(), data.into_inner())
        .await
}

pub async fn delete_assignment(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, id.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    // 课程维度：创建与列表
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/assignments").service(
            web::resource("")
                .route(web::post().to(create_assignment))
                .route(web::get().to(list_assignments)),
        ),
    );
    // 作业维度：详情、更新、删除
    cfg.service(
        web::scope("/api/v1/assignments").service(
            web::resource("/{id}")
                .route(web::get().to(get_assignment))
                .route(web::put().to(update_assignment))
                .route(web::delete().to(delete_assignment)),
        ),
    );
}
