use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::resources::requests::CreateResourceRequest;
use crate::services::ResourceService;

// 懒加载的全局 RESOURCE_SERVICE 实例
static RESOURCE_SERVICE: Lazy<ResourceService> = Lazy::new(ResourceService::new_lazy);

// HTTP处理程序
pub async fn add_resource(
    req: HttpRequest,
    class_id: web::Path<i64>,
    data: web::Json<CreateResourceRequest>,
) -> ActixResult<HttpResponse> {
    RESOURCE_SERVICE
        .add_resource(&req, class_id.into_inner(), data.into_inner())
        .await
}

pub async fn list_resources(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    RESOURCE_SERVICE
        .list_resources(&req, class_id.into_inner())
        .await
}

pub async fn delete_resource(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    RESOURCE_SERVICE.delete_resource(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_resources_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/resources").service(
            web::resource("")
                .route(web::post().to(add_resource))
                .route(web::get().to(list_resources)),
        ),
    );
    cfg.service(
        web::scope("/api/v1/resources")
            .service(web::resource("/{id}").route(web::delete().to(delete_resource))),
    );
}
