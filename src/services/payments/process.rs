use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PaymentService;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::{requests::ProcessPaymentRequest, responses::PaymentReceipt},
};
use crate::utils::random_code::generate_transaction_id;
use crate::utils::validate::validate_card_details;

pub async fn process_payment(
    service: &PaymentService,
    request: &HttpRequest,
    data: ProcessPaymentRequest,
) -> ActixResult<HttpResponse> {
    // 卡片字段只做格式校验，不会被持久化，也不会发起真实扣款
    if let Err(msg) = validate_card_details(&data.card_number, &data.expiry_date, &data.cvv) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaymentDetailsInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    // 课程必须存在
    match storage.get_class_offering_by_id(data.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Error checking class for payment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Payment processing failed",
                )),
            );
        }
    }

    match storage
        .create_payment(data.class_id, &data.user_id, data.amount)
        .await
    {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaymentReceipt {
                transaction_id: generate_transaction_id(),
            },
            "Payment processed successfully",
        ))),
        Err(e) => {
            error!("Error recording payment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::PaymentFailed,
                    "Payment processing failed",
                )),
            )
        }
    }
}
