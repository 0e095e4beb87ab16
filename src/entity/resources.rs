//! 课程资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub resource_type: String,
    pub url: String,
    pub teacher_id: String,
    pub created_at: i64,
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
    pub fn into_resource(self) -> crate::models::resources::entities::Resource {
        use crate::models::resources::entities::{Resource, ResourceType};
        use chrono::{DateTime, Utc};

        Resource {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            resource_type: self
                .resource_type
                .parse::<ResourceType>()
                .unwrap_or(ResourceType::Link),
            url: self.url,
            teacher_id: self.teacher_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
