//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::class_offerings::Column as ClassColumn;
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{LearnifyError, Result};
use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    responses::AssignmentWithCount,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业并递增课程 total_assignments
    pub async fn create_assignment_impl(
        &self,
        class_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.map(|d| d.timestamp())),
            max_points: Set(req.max_points),
            created_at: Set(now),
            updated_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("创建作业失败: {e}")))?;

        self.adjust_class_counter(class_id, ClassColumn::TotalAssignments, 1)
            .await?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 通过 ID 获取作业及实时提交数
    pub async fn get_assignment_with_count_impl(
        &self,
        id: i64,
    ) -> Result<Option<AssignmentWithCount>> {
        let Some(assignment) = self.get_assignment_by_id_impl(id).await? else {
            return Ok(None);
        };

        let submission_count = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("统计提交数失败: {e}")))?;

        Ok(Some(AssignmentWithCount {
            assignment,
            submission_count,
        }))
    }

    /// 列出课程下全部作业，附带各自的实时提交数
    pub async fn list_assignments_with_counts_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<AssignmentWithCount>> {
        let assignments = Assignments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询作业列表失败: {e}")))?;

        let mut result = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let submission_count = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.eq(assignment.id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    LearnifyError::database_operation(format!("统计提交数失败: {e}"))
                })?;
            result.push(AssignmentWithCount {
                assignment: assignment.into_assignment(),
                submission_count,
            });
        }

        Ok(result)
    }

    /// 整体替换作业的四个可编辑字段，并打上 updated_at
    ///
    /// 目标不存在或没有实际变更时返回 None（"no changes made" 语义）。
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询作业失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let deadline = req.deadline.map(|d| d.timestamp());
        if existing.title == req.title
            && existing.description == req.description
            && existing.deadline == deadline
            && existing.max_points == req.max_points
        {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(deadline),
            max_points: Set(req.max_points),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }

    /// 删除作业
    ///
    /// 顺序：先删该作业的全部提交，再删作业本身，最后递减课程
    /// total_assignments。三步各自独立提交（见一致性契约），但任何
    /// 一步失败都不会让计数器先于实体变化。
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let existing = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询作业失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        Submissions::delete_many()
            .filter(SubmissionColumn::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("删除提交失败: {e}")))?;

        Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("删除作业失败: {e}")))?;

        self.adjust_class_counter(existing.class_id, ClassColumn::TotalAssignments, -1)
            .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::models::assignments::requests::{
        CreateAssignmentRequest, UpdateAssignmentRequest,
    };
    use crate::models::classes::requests::SubmitClassRequest;
    use crate::models::submissions::requests::SubmitAssignmentRequest;

    fn submit_class() -> SubmitClassRequest {
        SubmitClassRequest {
            instructor_email: "t@test.dev".to_string(),
            instructor_name: None,
            title: "Rust 101".to_string(),
            price: 10.0,
            description: None,
            image: None,
        }
    }

    fn create_assignment(title: &str) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            title: title.to_string(),
            description: Some("write a parser".to_string()),
            deadline: None,
            max_points: 100.0,
        }
    }

    #[tokio::test]
    async fn test_create_assignment_bumps_counter() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class())
            .await
            .unwrap();

        let assignment = storage
            .create_assignment_impl(class.id, create_assignment("hw1"))
            .await
            .unwrap();
        assert_eq!(assignment.max_points, 100.0);

        let fresh = storage
            .get_class_offering_by_id_impl(class.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.total_assignments, 1);
    }

    #[tokio::test]
    async fn test_delete_assignment_cascades_submissions() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class())
            .await
            .unwrap();
        let assignment = storage
            .create_assignment_impl(class.id, create_assignment("hw1"))
            .await
            .unwrap();

        for uid in ["u1", "u2"] {
            storage
                .upsert_submission_impl(
                    assignment.id,
                    SubmitAssignmentRequest {
                        user_id: uid.to_string(),
                        submission_text: Some("answer".to_string()),
                        submission_url: None,
                    },
                )
                .await
                .unwrap();
        }

        assert!(storage.delete_assignment_impl(assignment.id).await.unwrap());

        // 提交已随作业删除
        let remaining = storage
            .list_submissions_for_student_impl("u1")
            .await
            .unwrap();
        assert!(remaining.is_empty());

        // 计数器恰好减一
        let fresh = storage
            .get_class_offering_by_id_impl(class.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.total_assignments, 0);

        // 二次删除报告 NotFound
        assert!(!storage.delete_assignment_impl(assignment.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_assignment_no_change_reported() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class())
            .await
            .unwrap();
        let assignment = storage
            .create_assignment_impl(class.id, create_assignment("hw1"))
            .await
            .unwrap();

        let updated = storage
            .update_assignment_impl(
                assignment.id,
                UpdateAssignmentRequest {
                    title: "hw1 revised".to_string(),
                    description: Some("write a parser".to_string()),
                    deadline: None,
                    max_points: 80.0,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "hw1 revised");
        assert!(updated.updated_at.is_some());

        // 同样的载荷再发一次：无变更
        let unchanged = storage
            .update_assignment_impl(
                assignment.id,
                UpdateAssignmentRequest {
                    title: "hw1 revised".to_string(),
                    description: Some("write a parser".to_string()),
                    deadline: None,
                    max_points: 80.0,
                },
            )
            .await
            .unwrap();
        assert!(unchanged.is_none());
    }

    #[tokio::test]
    async fn test_list_assignments_with_counts() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit_class())
            .await
            .unwrap();
        let hw1 = storage
            .create_assignment_impl(class.id, create_assignment("hw1"))
            .await
            .unwrap();
        storage
            .create_assignment_impl(class.id, create_assignment("hw2"))
            .await
            .unwrap();

        storage
            .upsert_submission_impl(
                hw1.id,
                SubmitAssignmentRequest {
                    user_id: "u1".to_string(),
                    submission_text: Some("answer".to_string()),
                    submission_url: None,
                },
            )
            .await
            .unwrap();

        let list = storage
            .list_assignments_with_counts_impl(class.id)
            .await
            .unwrap();
        assert_eq!(list.len(), 2);
        let hw1_entry = list
            .iter()
            .find(|a| a.assignment.id == hw1.id)
            .expect("hw1 present");
        assert_eq!(hw1_entry.submission_count, 1);
    }
}
