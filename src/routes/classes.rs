use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classes::requests::{ClassQueryParams, SubmitClassRequest, UpdateClassRequest};
use crate::services::ClassService;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn submit_class(
    req: HttpRequest,
    class_data: web::Json<SubmitClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .submit_class(&req, class_data.into_inner())
        .await
}

pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn list_all_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_all_classes(&req).await
}

pub async fn get_class(req: HttpRequest, class_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.into_inner()).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.into_inner()).await
}

pub async fn approve_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .decide_class(&req, class_id.into_inner(), "approve".to_string())
        .await
}

pub async fn reject_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .decide_class(&req, class_id.into_inner(), "reject".to_string())
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .service(
                web::resource("")
                    // 教师提交课程进入审批流程
                    .route(web::post().to(submit_class))
                    .route(web::get().to(list_classes)),
            )
            // 管理后台的全量视图
            .service(web::resource("/all").route(web::get().to(list_all_classes)))
            .service(
                web::resource("/{class_id}")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class))
                    .route(web::delete().to(delete_class)),
            )
            // 审批终态转移，过审附带教师提升
            .service(web::resource("/{class_id}/approve").route(web::put().to(approve_class)))
            .service(web::resource("/{class_id}/reject").route(web::put().to(reject_class))),
    );
}
