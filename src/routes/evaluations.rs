use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::evaluations::requests::EvaluateRequest;
use crate::services::EvaluationService;

// 懒加载的全局 EVALUATION_SERVICE 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

// HTTP处理程序
pub async fn evaluate_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
    data: web::Json<EvaluateRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .evaluate_class(&req, class_id.into_inner(), data.into_inner())
        .await
}

pub async fn list_all_reviews(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_all_reviews(&req).await
}

// 配置路由
pub fn configure_evaluations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/evaluations")
            .service(web::resource("").route(web::post().to(evaluate_class))),
    );
    // 全站评价信息流（首页展示用）
    cfg.service(
        web::scope("/api/v1/reviews")
            .service(web::resource("").route(web::get().to(list_all_reviews))),
    );
}
