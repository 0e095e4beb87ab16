//! 课程资料存储操作

use super::SeaOrmStorage;
use crate::entity::resources::{ActiveModel, Column, Entity as Resources};
use crate::errors::{LearnifyError, Result};
use crate::models::resources::{entities::Resource, requests::CreateResourceRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 添加课程资料
    pub async fn create_resource_impl(
        &self,
        class_id: i64,
        req: CreateResourceRequest,
    ) -> Result<Resource> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            title: Set(req.title),
            description: Set(req.description.unwrap_or_default()),
            resource_type: Set(req.resource_type.to_string()),
            url: Set(req.url),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("添加资料失败: {e}")))?;

        Ok(result.into_resource())
    }

    /// 列出课程下全部资料，最新在前
    pub async fn list_resources_impl(&self, class_id: i64) -> Result<Vec<Resource>> {
        let result = Resources::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询资料列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_resource()).collect())
    }

    /// 删除资料
    pub async fn delete_resource_impl(&self, id: i64) -> Result<bool> {
        let result = Resources::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("删除资料失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::models::resources::entities::ResourceType;
    use crate::models::resources::requests::CreateResourceRequest;

    fn resource(title: &str) -> CreateResourceRequest {
        CreateResourceRequest {
            title: title.to_string(),
            description: None,
            resource_type: ResourceType::default(),
            url: "https://example.com/slides".to_string(),
            teacher_id: "t1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let storage = memory_storage().await;

        let created = storage.create_resource_impl(7, resource("slides")).await.unwrap();
        assert_eq!(created.resource_type, ResourceType::Link);
        assert_eq!(created.description, "");

        let listed = storage.list_resources_impl(7).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "slides");

        assert!(storage.delete_resource_impl(created.id).await.unwrap());
        assert!(!storage.delete_resource_impl(created.id).await.unwrap());
        assert!(storage.list_resources_impl(7).await.unwrap().is_empty());
    }
}
