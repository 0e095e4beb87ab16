use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::payments::requests::ProcessPaymentRequest;
use crate::services::PaymentService;

// 懒加载的全局 PAYMENT_SERVICE 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

// HTTP处理程序
pub async fn process_payment(
    req: HttpRequest,
    data: web::Json<ProcessPaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .process_payment(&req, data.into_inner())
        .await
}

// 配置路由
pub fn configure_payments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .service(web::resource("").route(web::post().to(process_payment))),
    );
}
