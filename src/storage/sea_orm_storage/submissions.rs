//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::class_offerings::{Column as ClassColumn, Entity as ClassOfferings};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{LearnifyError, Result};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::SubmitAssignmentRequest,
    responses::{StudentSubmission, SubmissionWithStudent},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 提交或重新提交作业
    ///
    /// 已有 (assignment_id, user_id) 记录时原地更新：文本/链接/时间戳
    /// 刷新，状态回到 submitted，已有的 grade/feedback 保持不变。
    /// 首次提交插入新记录并递增课程 total_submissions（重新提交不计数）。
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        req: SubmitAssignmentRequest,
    ) -> Result<(Submission, bool)> {
        let assignment = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询作业失败: {e}")))?
            .ok_or_else(|| LearnifyError::not_found("Assignment not found"))?;

        let now = chrono::Utc::now().timestamp();
        let text = req.submission_text.unwrap_or_default();
        let url = req.submission_url.unwrap_or_default();

        let existing = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(req.user_id.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询提交失败: {e}")))?;

        if let Some(existing) = existing {
            let mut model = existing.into_active_model();
            model.submission_text = Set(text);
            model.submission_url = Set(url);
            model.submitted_at = Set(now);
            model.status = Set(SubmissionStatus::Submitted.to_string());

            let result = model
                .update(&self.db)
                .await
                .map_err(|e| LearnifyError::database_operation(format!("更新提交失败: {e}")))?;

            return Ok((result.into_submission(), false));
        }

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            user_id: Set(req.user_id),
            submission_text: Set(text),
            submission_url: Set(url),
            status: Set(SubmissionStatus::Submitted.to_string()),
            submitted_at: Set(now),
            grade: Set(None),
            feedback: Set(None),
            graded_at: Set(None),
            ..Default::default()
        };

        // 并发首次提交由唯一索引裁决，落败方拿到 Conflict
        let result = model.insert(&self.db).await.map_err(LearnifyError::from)?;

        self.adjust_class_counter(assignment.class_id, ClassColumn::TotalSubmissions, 1)
            .await?;

        Ok((result.into_submission(), true))
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 评分：写入分数与反馈，状态置为 graded
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Submissions::update_many()
            .col_expr(Column::Grade, Expr::value(Some(grade)))
            .col_expr(Column::Feedback, Expr::value(feedback))
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::Graded.to_string()),
            )
            .col_expr(Column::GradedAt, Expr::value(Some(now)))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("评分失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 教师视角：作业下全部提交 + 学生信息
    ///
    /// 按外部UID做左连接，未匹配到用户时学生字段缺省（不丢行）。
    pub async fn list_submissions_for_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionWithStudent>> {
        let submissions = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询提交列表失败: {e}")))?;

        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<&str> = submissions.iter().map(|s| s.user_id.as_str()).collect();

        let users = Users::find()
            .filter(UserColumn::ExternalUid.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询学生信息失败: {e}")))?;

        let user_map: HashMap<String, _> = users
            .into_iter()
            .map(|u| (u.external_uid.clone(), u))
            .collect();

        Ok(submissions
            .into_iter()
            .map(|submission| {
                let student = user_map.get(&submission.user_id);
                SubmissionWithStudent {
                    student_name: student.map(|u| u.name.clone()),
                    student_email: student.map(|u| u.email.clone()),
                    student_photo: student.and_then(|u| u.photo_url.clone()),
                    submission: submission.into_submission(),
                }
            })
            .collect())
    }

    /// 学生视角：其全部提交 + 作业/课程上下文
    ///
    /// 两跳连接（提交 → 作业 → 课程），中间文档缺失时对应字段缺省，
    /// 行本身保留。
    pub async fn list_submissions_for_student_impl(
        &self,
        user_id: &str,
    ) -> Result<Vec<StudentSubmission>> {
        let submissions = Submissions::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询提交列表失败: {e}")))?;

        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let assignment_ids: Vec<i64> = submissions.iter().map(|s| s.assignment_id).collect();

        let assignments = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询作业失败: {e}")))?;

        let class_ids: Vec<i64> = assignments.iter().map(|a| a.class_id).collect();

        let classes = ClassOfferings::find()
            .filter(ClassColumn::Id.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程失败: {e}")))?;

        let assignment_map: HashMap<i64, _> =
            assignments.into_iter().map(|a| (a.id, a)).collect();
        let class_map: HashMap<i64, _> = classes.into_iter().map(|c| (c.id, c)).collect();

        Ok(submissions
            .into_iter()
            .map(|submission| {
                let assignment = assignment_map.get(&submission.assignment_id);
                let class = assignment.and_then(|a| class_map.get(&a.class_id));
                StudentSubmission {
                    assignment_title: assignment.map(|a| a.title.clone()),
                    assignment_deadline: assignment.and_then(|a| {
                        a.deadline.map(|ts| {
                            chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0)
                                .unwrap_or_default()
                        })
                    }),
                    max_points: assignment.map(|a| a.max_points),
                    class_name: class.map(|c| c.title.clone()),
                    class_id: class.map(|c| c.id),
                    submission: submission.into_submission(),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::errors::LearnifyError;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::classes::requests::SubmitClassRequest;
    use crate::models::submissions::entities::SubmissionStatus;
    use crate::models::submissions::requests::SubmitAssignmentRequest;
    use crate::models::users::requests::RegisterUserRequest;

    async fn seed(storage: &super::SeaOrmStorage) -> (i64, i64) {
        let class = storage
            .create_class_offering_impl(SubmitClassRequest {
                instructor_email: "t@test.dev".to_string(),
                instructor_name: None,
                title: "Rust 101".to_string(),
                price: 10.0,
                description: None,
                image: None,
            })
            .await
            .unwrap();
        let assignment = storage
            .create_assignment_impl(
                class.id,
                CreateAssignmentRequest {
                    title: "hw1".to_string(),
                    description: None,
                    deadline: None,
                    max_points: 100.0,
                },
            )
            .await
            .unwrap();
        (class.id, assignment.id)
    }

    fn submit(user: &str, text: &str) -> SubmitAssignmentRequest {
        SubmitAssignmentRequest {
            user_id: user.to_string(),
            submission_text: Some(text.to_string()),
            submission_url: None,
        }
    }

    #[tokio::test]
    async fn test_resubmission_updates_in_place() {
        let storage = memory_storage().await;
        let (class_id, assignment_id) = seed(&storage).await;

        let (first, created) = storage
            .upsert_submission_impl(assignment_id, submit("u1", "draft"))
            .await
            .unwrap();
        assert!(created);

        // 先评分，再重新提交
        assert!(
            storage
                .grade_submission_impl(first.id, 85.0, Some("Good work".to_string()))
                .await
                .unwrap()
        );

        let (second, created) = storage
            .upsert_submission_impl(assignment_id, submit("u1", "final"))
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(second.submission_text, "final");
        assert_eq!(second.status, SubmissionStatus::Submitted);
        // 重新提交不清掉已有评分
        assert_eq!(second.grade, Some(85.0));
        assert_eq!(second.feedback.as_deref(), Some("Good work"));

        // 计数器只在首次提交时加一
        let fresh = storage
            .get_class_offering_by_id_impl(class_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.total_submissions, 1);
    }

    #[tokio::test]
    async fn test_submit_to_missing_assignment() {
        let storage = memory_storage().await;
        let err = storage
            .upsert_submission_impl(9999, submit("u1", "text"))
            .await
            .unwrap_err();
        assert!(matches!(err, LearnifyError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_grade_sets_fields() {
        let storage = memory_storage().await;
        let (_, assignment_id) = seed(&storage).await;
        let (submission, _) = storage
            .upsert_submission_impl(assignment_id, submit("u1", "answer"))
            .await
            .unwrap();

        assert!(
            storage
                .grade_submission_impl(submission.id, 85.0, Some("Good work".to_string()))
                .await
                .unwrap()
        );

        let graded = storage
            .get_submission_by_id_impl(submission.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.status, SubmissionStatus::Graded);
        assert_eq!(graded.grade, Some(85.0));
        assert_eq!(graded.feedback.as_deref(), Some("Good work"));
        assert!(graded.graded_at.is_some());

        // 不存在的提交
        assert!(!storage.grade_submission_impl(9999, 1.0, None).await.unwrap());
    }

    #[tokio::test]
    async fn test_assignment_view_joins_students_by_external_uid() {
        let storage = memory_storage().await;
        let (_, assignment_id) = seed(&storage).await;

        storage
            .create_user_impl(RegisterUserRequest {
                uid: "u1".to_string(),
                name: "Alice".to_string(),
                email: "alice@test.dev".to_string(),
                photo: None,
            })
            .await
            .unwrap();

        storage
            .upsert_submission_impl(assignment_id, submit("u1", "a"))
            .await
            .unwrap();
        // u2 未登记，学生字段应缺省而非丢行
        storage
            .upsert_submission_impl(assignment_id, submit("u2", "b"))
            .await
            .unwrap();

        let list = storage
            .list_submissions_for_assignment_impl(assignment_id)
            .await
            .unwrap();
        assert_eq!(list.len(), 2);

        let known = list
            .iter()
            .find(|s| s.submission.user_id == "u1")
            .unwrap();
        assert_eq!(known.student_name.as_deref(), Some("Alice"));
        assert_eq!(known.student_email.as_deref(), Some("alice@test.dev"));

        let unknown = list
            .iter()
            .find(|s| s.submission.user_id == "u2")
            .unwrap();
        assert!(unknown.student_name.is_none());
    }

    #[tokio::test]
    async fn test_student_view_two_hop_join() {
        let storage = memory_storage().await;
        let (class_id, assignment_id) = seed(&storage).await;

        storage
            .upsert_submission_impl(assignment_id, submit("u1", "a"))
            .await
            .unwrap();

        let list = storage.list_submissions_for_student_impl("u1").await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].assignment_title.as_deref(), Some("hw1"));
        assert_eq!(list[0].class_name.as_deref(), Some("Rust 101"));
        assert_eq!(list[0].class_id, Some(class_id));
        assert_eq!(list[0].max_points, Some(100.0));
    }
}
