//! 教师申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub instructor_email: String,
    pub category: Option<String>,
    pub experience: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher_request(self) -> crate::models::teacher_requests::entities::TeacherRequest {
        use crate::models::common::status::ApprovalStatus;
        use crate::models::teacher_requests::entities::TeacherRequest;
        use chrono::{DateTime, Utc};

        TeacherRequest {
            id: self.id,
            instructor_email: self.instructor_email,
            category: self.category,
            experience: self.experience,
            details: self
                .details
                .as_deref()
                .and_then(|d| serde_json::from_str(d).ok()),
            status: self
                .status
                .parse::<ApprovalStatus>()
                .unwrap_or(ApprovalStatus::Pending),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
