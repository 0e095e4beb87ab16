use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;
use crate::models::common::status::ApprovalStatus;

// 提交课程请求，入库时强制 status=pending、计数器归零
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct SubmitClassRequest {
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
}

// 课程列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub instructor_email: Option<String>,
    pub status: Option<ApprovalStatus>,
}

// 更新课程请求：只允许更新这四个字段，其余字段由工作流维护
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl UpdateClassRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}

// 更新学习进度请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateProgressRequest {
    pub progress: f64,
}
