use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 注册成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct RegisterUserResponse {
    pub user_id: i64,
}

// 角色查询响应，未登记用户默认 student
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct RoleResponse {
    pub role: String,
}
