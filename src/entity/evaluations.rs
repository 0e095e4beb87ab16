//! 课程评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub user_id: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub rating: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_offerings::Entity",
        from = "Column::ClassId",
        to = "super::class_offerings::Column::Id"
    )]
    ClassOffering,
}

impl Related<super::class_offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassOffering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::Evaluation;
        use chrono::{DateTime, Utc};

        Evaluation {
            id: self.id,
            class_id: self.class_id,
            user_id: self.user_id,
            name: self.name,
            photo_url: self.photo_url,
            rating: self.rating,
            description: self.description,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
        }
    }
}
