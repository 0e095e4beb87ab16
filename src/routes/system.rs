use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthStatus {
    pub name: String,
    pub version: String,
    pub uptime_seconds: i64,
}

// 根路径的存活探针
pub async fn root_banner() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().body("Learnify Server is Running"))
}

pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    let uptime_seconds = req
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthStatus {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds,
        },
        "ok",
    )))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root_banner)));
    cfg.service(
        web::scope("/api/v1/system")
            .service(web::resource("/health").route(web::get().to(health))),
    );
}
