//! 选课存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_offerings::{
    Column as ClassColumn, Entity as ClassOfferings,
};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{LearnifyError, Result};
use crate::models::enrollments::{entities::Enrollment, responses::EnrolledCourse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 选课
    ///
    /// 先做存在性检查快速失败；并发竞争下两个请求同时通过检查时，
    /// (class_id, user_id) 唯一索引保证只有一个插入成功，落败方拿到
    /// Conflict。计数器只在插入成功后递增，因此恰好加一。
    pub async fn enroll_impl(&self, class_id: i64, user_id: &str) -> Result<Enrollment> {
        let existing = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询选课记录失败: {e}")))?;

        if existing.is_some() {
            return Err(LearnifyError::conflict("User already enrolled in this class"));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id.to_string()),
            progress: Set(0.0),
            completed: Set(false),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(LearnifyError::from)?;

        self.adjust_class_counter(class_id, ClassColumn::TotalEnrollment, 1)
            .await?;

        Ok(result.into_enrollment())
    }

    /// 学生的已选课程列表
    ///
    /// 批量取课程后按 class_id 合并进度；选课记录引用的课程已不存在时
    /// 静默丢弃该行（预期的降级行为，不视为错误）。
    pub async fn list_enrolled_courses_impl(&self, user_id: &str) -> Result<Vec<EnrolledCourse>> {
        let enrollments = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询选课记录失败: {e}")))?;

        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let class_ids: Vec<i64> = enrollments.iter().map(|e| e.class_id).collect();

        let classes = ClassOfferings::find()
            .filter(ClassColumn::Id.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程失败: {e}")))?;

        let class_map: HashMap<i64, _> = classes.into_iter().map(|c| (c.id, c)).collect();

        Ok(enrollments
            .into_iter()
            .filter_map(|enrollment| {
                let class = class_map.get(&enrollment.class_id)?.clone();
                let enrollment = enrollment.into_enrollment();
                Some(EnrolledCourse {
                    class: class.into_class_offering(),
                    progress: enrollment.progress,
                    enrolled_at: enrollment.enrolled_at,
                })
            })
            .collect())
    }

    /// 更新课程下选课记录的学习进度
    pub async fn update_progress_impl(&self, class_id: i64, progress: f64) -> Result<bool> {
        let result = Enrollments::update_many()
            .col_expr(Column::Progress, Expr::value(progress))
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新学习进度失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::errors::LearnifyError;
    use crate::models::classes::requests::SubmitClassRequest;

    fn submit_class(title: &str) -> SubmitClassRequest {
        SubmitClassRequest {
            instructor_email: "t@test.dev".to_string(),
            instructor_name: None,
            title: title.to_string(),
            price: 10.0,
            description: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_enroll_counts_each_distinct_user_once() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class("Rust 101"))
            .await
            .unwrap();

        for uid in ["u1", "u2", "u3"] {
            storage.enroll_impl(class.id, uid).await.unwrap();
        }

        let fresh = storage
            .get_class_offering_by_id_impl(class.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.total_enrollment, 3);
    }

    #[tokio::test]
    async fn test_duplicate_enroll_conflicts_and_counts_once() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class("Rust 101"))
            .await
            .unwrap();

        storage.enroll_impl(class.id, "u1").await.unwrap();
        let err = storage.enroll_impl(class.id, "u1").await.unwrap_err();
        assert!(matches!(err, LearnifyError::Conflict(_)));

        let fresh = storage
            .get_class_offering_by_id_impl(class.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.total_enrollment, 1);
    }

    #[tokio::test]
    async fn test_enrolled_courses_round_trip_with_progress() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class("Rust 101"))
            .await
            .unwrap();
        storage.enroll_impl(class.id, "u1").await.unwrap();

        // 未更新过时默认进度为 0
        let courses = storage.list_enrolled_courses_impl("u1").await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].progress, 0.0);

        assert!(storage.update_progress_impl(class.id, 42.0).await.unwrap());

        let courses = storage.list_enrolled_courses_impl("u1").await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].progress, 42.0);
        assert_eq!(courses[0].class.id, class.id);
    }

    #[tokio::test]
    async fn test_dangling_enrollment_dropped_silently() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class("Rust 101"))
            .await
            .unwrap();
        storage.enroll_impl(class.id, "u1").await.unwrap();

        // 课程被删除后，选课记录成为孤儿，列表中静默消失
        storage.delete_class_offering_impl(class.id).await.unwrap();
        let courses = storage.list_enrolled_courses_impl("u1").await.unwrap();
        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn test_update_progress_without_enrollment() {
        let storage = memory_storage().await;
        assert!(!storage.update_progress_impl(9999, 10.0).await.unwrap());
    }
}
