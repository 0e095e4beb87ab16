use serde::Deserialize;
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 注册用户请求（身份提供方完成认证后的首次登记）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct RegisterUserRequest {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
}

// 按邮箱筛选用户的查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserQueryParams {
    pub email: Option<String>,
}

// 用户搜索参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserSearchParams {
    pub term: String,
}

// 设置角色请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

// 按邮箱提升为教师的请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct MakeTeacherRequest {
    pub email: String,
}
