//! 课程评价存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_offerings::{Column as ClassColumn, Entity as ClassOfferings};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::{LearnifyError, Result};
use crate::models::evaluations::{
    entities::Evaluation, requests::EvaluateRequest, responses::ReviewWithClass,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 评价课程
    ///
    /// 插入评价后对该课程的评价集合做一次全量重读，以其均值和数量
    /// 覆盖 average_rating / total_reviews。每次重算对其读到的快照
    /// 都是正确的，并发下以最后一次落盘为准（最终一致）。
    pub async fn evaluate_class_impl(
        &self,
        class_id: i64,
        req: EvaluateRequest,
    ) -> Result<Evaluation> {
        let existing = Evaluations::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(req.user_id.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询评价失败: {e}")))?;

        if existing.is_some() {
            return Err(LearnifyError::conflict(
                "You have already submitted a review for this class",
            ));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(req.user_id),
            name: Set(req.name),
            photo_url: Set(req.photo),
            rating: Set(req.rating),
            description: Set(req.description),
            submitted_at: Set(now),
            ..Default::default()
        };

        // 并发重复评价由唯一索引裁决
        let result = model.insert(&self.db).await.map_err(LearnifyError::from)?;

        self.refresh_class_rating(class_id).await?;

        Ok(result.into_evaluation())
    }

    /// 全量重算课程均分与评价数并写回
    async fn refresh_class_rating(&self, class_id: i64) -> Result<()> {
        let evaluations = Evaluations::find()
            .filter(Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询评价失败: {e}")))?;

        let total_reviews = evaluations.len() as i64;
        let average_rating = if total_reviews == 0 {
            None
        } else {
            Some(evaluations.iter().map(|e| e.rating).sum::<f64>() / total_reviews as f64)
        };

        ClassOfferings::update_many()
            .col_expr(ClassColumn::AverageRating, Expr::value(average_rating))
            .col_expr(ClassColumn::TotalReviews, Expr::value(total_reviews))
            .filter(ClassColumn::Id.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新课程评分失败: {e}")))?;

        Ok(())
    }

    /// 全站评价信息流：评价 + 课程上下文
    ///
    /// 与提交侧的连接不同，这里是内连接：课程已不存在的评价整行排除。
    pub async fn list_all_reviews_impl(&self) -> Result<Vec<ReviewWithClass>> {
        let evaluations = Evaluations::find()
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询评价列表失败: {e}")))?;

        if evaluations.is_empty() {
            return Ok(Vec::new());
        }

        let class_ids: Vec<i64> = evaluations.iter().map(|e| e.class_id).collect();

        let classes = ClassOfferings::find()
            .filter(ClassColumn::Id.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程失败: {e}")))?;

        let class_map: HashMap<i64, _> = classes.into_iter().map(|c| (c.id, c)).collect();

        Ok(evaluations
            .into_iter()
            .filter_map(|evaluation| {
                let class = class_map.get(&evaluation.class_id)?;
                Some(ReviewWithClass {
                    class_name: class.title.clone(),
                    instructor_name: class.instructor_name.clone(),
                    class_image: class.image.clone(),
                    evaluation: evaluation.into_evaluation(),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::errors::LearnifyError;
    use crate::models::classes::requests::SubmitClassRequest;
    use crate::models::evaluations::requests::EvaluateRequest;

    fn evaluate(user: &str, rating: f64) -> EvaluateRequest {
        EvaluateRequest {
            user_id: user.to_string(),
            name: Some("Reviewer".to_string()),
            photo: None,
            rating,
            description: Some("nice course".to_string()),
        }
    }

    async fn seed_class(storage: &super::SeaOrmStorage) -> i64 {
        storage
            .create_class_offering_impl(SubmitClassRequest {
                instructor_email: "t@test.dev".to_string(),
                instructor_name: Some("Jane Doe".to_string()),
                title: "Rust 101".to_string(),
                price: 10.0,
                description: None,
                image: None,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_average_recomputed_over_full_set() {
        let storage = memory_storage().await;
        let class_id = seed_class(&storage).await;

        storage
            .evaluate_class_impl(class_id, evaluate("u1", 5.0))
            .await
            .unwrap();
        storage
            .evaluate_class_impl(class_id, evaluate("u2", 3.0))
            .await
            .unwrap();
        storage
            .evaluate_class_impl(class_id, evaluate("u3", 4.0))
            .await
            .unwrap();

        let fresh = storage
            .get_class_offering_by_id_impl(class_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.average_rating, Some(4.0));
        assert_eq!(fresh.total_reviews, 3);
    }

    #[tokio::test]
    async fn test_duplicate_evaluation_leaves_average_unchanged() {
        let storage = memory_storage().await;
        let class_id = seed_class(&storage).await;

        storage
            .evaluate_class_impl(class_id, evaluate("u1", 5.0))
            .await
            .unwrap();

        let err = storage
            .evaluate_class_impl(class_id, evaluate("u1", 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, LearnifyError::Conflict(_)));

        let fresh = storage
            .get_class_offering_by_id_impl(class_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.average_rating, Some(5.0));
        assert_eq!(fresh.total_reviews, 1);
    }

    #[tokio::test]
    async fn test_reviews_feed_is_inner_join() {
        let storage = memory_storage().await;
        let kept = seed_class(&storage).await;
        let dropped = seed_class(&storage).await;

        storage
            .evaluate_class_impl(kept, evaluate("u1", 4.0))
            .await
            .unwrap();
        storage
            .evaluate_class_impl(dropped, evaluate("u2", 2.0))
            .await
            .unwrap();

        // 课程删除后，其评价从信息流中整行消失
        storage.delete_class_offering_impl(dropped).await.unwrap();

        let reviews = storage.list_all_reviews_impl().await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].evaluation.class_id, kept);
        assert_eq!(reviews[0].class_name, "Rust 101");
        assert_eq!(reviews[0].instructor_name.as_deref(), Some("Jane Doe"));
    }
}
