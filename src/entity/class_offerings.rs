//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_offerings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub title: String,
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: String,
    pub total_enrollment: i64,
    pub total_assignments: i64,
    pub total_submissions: i64,
    pub average_rating: Option<f64>,
    pub total_reviews: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::evaluations::Entity")]
    Evaluations,
    #[sea_orm(has_many = "super::resources::Entity")]
    Resources,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl Related<super::resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class_offering(self) -> crate::models::classes::entities::ClassOffering {
        use crate::models::classes::entities::ClassOffering;
        use crate::models::common::status::ApprovalStatus;
        use chrono::{DateTime, Utc};

        ClassOffering {
            id: self.id,
            instructor_email: self.instructor_email,
            instructor_name: self.instructor_name,
            title: self.title,
            price: self.price,
            description: self.description,
            image: self.image,
            status: self
                .status
                .parse::<ApprovalStatus>()
                .unwrap_or(ApprovalStatus::Pending),
            total_enrollment: self.total_enrollment,
            total_assignments: self.total_assignments,
            total_submissions: self.total_submissions,
            average_rating: self.average_rating,
            total_reviews: self.total_reviews,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
