use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::users::requests::{
    MakeTeacherRequest, RegisterUserRequest, UpdateRoleRequest, UserQueryParams, UserSearchParams,
};
use crate::services::UserService;

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn register_user(
    req: HttpRequest,
    user_data: web::Json<RegisterUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .register_user(&req, user_data.into_inner())
        .await
}

pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserQueryParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req, query.into_inner()).await
}

pub async fn search_users(
    req: HttpRequest,
    query: web::Query<UserSearchParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.search_users(&req, query.into_inner()).await
}

pub async fn get_role(req: HttpRequest, uid: web::Path<String>) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_role(&req, uid.into_inner()).await
}

pub async fn make_admin(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.make_admin(&req, id.into_inner()).await
}

pub async fn update_role(
    req: HttpRequest,
    id: web::Path<i64>,
    update: web::Json<UpdateRoleRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_role(&req, id.into_inner(), update.into_inner())
        .await
}

pub async fn make_teacher(
    req: HttpRequest,
    data: web::Json<MakeTeacherRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.make_teacher(&req, data.into_inner()).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(
                web::resource("")
                    // 身份提供方认证完成后的首次登记
                    .route(web::post().to(register_user))
                    // 按邮箱筛选或列出全部用户
                    .route(web::get().to(list_users)),
            )
            .service(web::resource("/search").route(web::get().to(search_users)))
            // 固定段路由先于 {id} 注册
            .service(web::resource("/make-teacher").route(web::put().to(make_teacher)))
            .service(web::resource("/{uid}/role").route(web::get().to(get_role)))
            .service(web::resource("/{id}/make-admin").route(web::put().to(make_admin)))
            .service(web::resource("/{id}/update-role").route(web::put().to(update_role))),
    );
}
