//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::class_offerings::{ActiveModel, Column, Entity as ClassOfferings};
use crate::errors::{LearnifyError, Result};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::ClassOffering,
        requests::{ClassQueryParams, SubmitClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    common::status::{ApprovalStatus, DecisionAction},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::{Expr, ExprTrait},
};

impl SeaOrmStorage {
    /// 提交课程，初始状态 pending，全部计数器归零
    pub async fn create_class_offering_impl(
        &self,
        req: SubmitClassRequest,
    ) -> Result<ClassOffering> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            instructor_email: Set(req.instructor_email),
            instructor_name: Set(req.instructor_name),
            title: Set(req.title),
            price: Set(req.price),
            description: Set(req.description),
            image: Set(req.image),
            status: Set(ApprovalStatus::Pending.to_string()),
            total_enrollment: Set(0),
            total_assignments: Set(0),
            total_submissions: Set(0),
            average_rating: Set(None),
            total_reviews: Set(0),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("提交课程失败: {e}")))?;

        Ok(result.into_class_offering())
    }

    /// 通过 ID 获取课程
    pub async fn get_class_offering_by_id_impl(
        &self,
        class_id: i64,
    ) -> Result<Option<ClassOffering>> {
        let result = ClassOfferings::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_class_offering()))
    }

    /// 分页列出课程，筛选条件 AND 叠加
    pub async fn list_class_offerings_impl(
        &self,
        query: ClassQueryParams,
    ) -> Result<ClassListResponse> {
        let (page, limit) = query.pagination.normalized();

        let mut select = ClassOfferings::find();

        if let Some(ref email) = query.instructor_email {
            select = select.filter(Column::InstructorEmail.eq(email));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(ClassListResponse {
            items: items.into_iter().map(|m| m.into_class_offering()).collect(),
            pagination: PaginationInfo {
                total_pages: pages,
                current_page: page,
                total,
            },
        })
    }

    /// 列出全部课程（管理后台）
    pub async fn list_all_class_offerings_impl(&self) -> Result<Vec<ClassOffering>> {
        let result = ClassOfferings::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class_offering()).collect())
    }

    /// 更新课程的可编辑字段
    ///
    /// 只接受 title/price/description/image；计数器与状态永远不经这里。
    /// 目标不存在或更新后无实际变化时返回 None（"no changes made" 语义）。
    pub async fn update_class_offering_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<ClassOffering>> {
        let existing = ClassOfferings::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut changed = false;
        let mut model = ActiveModel {
            id: Set(class_id),
            ..Default::default()
        };

        if let Some(title) = update.title
            && title != existing.title
        {
            model.title = Set(title);
            changed = true;
        }

        if let Some(price) = update.price
            && price != existing.price
        {
            model.price = Set(price);
            changed = true;
        }

        if let Some(description) = update.description
            && Some(&description) != existing.description.as_ref()
        {
            model.description = Set(Some(description));
            changed = true;
        }

        if let Some(image) = update.image
            && Some(&image) != existing.image.as_ref()
        {
            model.image = Set(Some(image));
            changed = true;
        }

        if !changed {
            return Ok(None);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_class_offering()))
    }

    /// 删除课程
    ///
    /// 只删除课程本身：选课、作业、评价、资料一律保留（孤儿窗口由
    /// 运维侧对账处理）。
    pub async fn delete_class_offering_impl(&self, class_id: i64) -> Result<bool> {
        let result = ClassOfferings::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 审批课程，契约与教师申请一致：仅 pending 可进入终态
    pub async fn decide_class_offering_impl(
        &self,
        class_id: i64,
        action: DecisionAction,
    ) -> Result<Option<ClassOffering>> {
        let result = ClassOfferings::update_many()
            .col_expr(
                Column::Status,
                Expr::value(action.target_status().to_string()),
            )
            .filter(Column::Id.eq(class_id))
            .filter(Column::Status.eq(ApprovalStatus::Pending.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("审批课程失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let updated = ClassOfferings::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(updated.map(|m| m.into_class_offering()))
    }

    /// 原子调整课程上的派生计数器（单文档单语句，无读改写窗口）
    pub(crate) async fn adjust_class_counter(
        &self,
        class_id: i64,
        counter: Column,
        delta: i64,
    ) -> Result<()> {
        ClassOfferings::update_many()
            .col_expr(counter, Expr::col(counter).add(delta))
            .filter(Column::Id.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新课程计数失败: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::models::classes::requests::{
        ClassQueryParams, SubmitClassRequest, UpdateClassRequest,
    };
    use crate::models::common::status::{ApprovalStatus, DecisionAction};

    fn submit(title: &str, email: &str) -> SubmitClassRequest {
        SubmitClassRequest {
            instructor_email: email.to_string(),
            instructor_name: Some("Jane Doe".to_string()),
            title: title.to_string(),
            price: 49.0,
            description: Some("desc".to_string()),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending_with_zero_counters() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit("Rust 101", "t@test.dev"))
            .await
            .unwrap();
        assert_eq!(class.status, ApprovalStatus::Pending);
        assert_eq!(class.total_enrollment, 0);
        assert_eq!(class.total_assignments, 0);
        assert_eq!(class.total_submissions, 0);
        assert_eq!(class.total_reviews, 0);
        assert!(class.average_rating.is_none());
    }

    #[tokio::test]
    async fn test_update_reports_no_change() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit("Rust 101", "t@test.dev"))
            .await
            .unwrap();

        // 实际变更
        let updated = storage
            .update_class_offering_impl(
                class.id,
                UpdateClassRequest {
                    title: Some("Rust 201".to_string()),
                    price: None,
                    description: None,
                    image: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Rust 201");

        // 相同值再更新一次，报告为无变更
        let unchanged = storage
            .update_class_offering_impl(
                class.id,
                UpdateClassRequest {
                    title: Some("Rust 201".to_string()),
                    price: None,
                    description: None,
                    image: None,
                },
            )
            .await
            .unwrap();
        assert!(unchanged.is_none());

        // 不存在的课程
        let missing = storage
            .update_class_offering_impl(
                9999,
                UpdateClassRequest {
                    title: Some("x".to_string()),
                    price: None,
                    description: None,
                    image: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_decide_class_offering_terminal() {
        let storage = memory_storage().await;
        let class = storage
            .create_class_offering_impl(submit("Rust 101", "t@test.dev"))
            .await
            .unwrap();

        let approved = storage
            .decide_class_offering_impl(class.id, DecisionAction::Approve)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(approved.status, ApprovalStatus::Approved);

        let again = storage
            .decide_class_offering_impl(class.id, DecisionAction::Approve)
            .await
            .unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_instructor_and_status() {
        let storage = memory_storage().await;
        let mine = storage
            .create_class_offering_impl(submit("Rust 101", "t@test.dev"))
            .await
            .unwrap();
        storage
            .create_class_offering_impl(submit("Go 101", "other@test.dev"))
            .await
            .unwrap();
        storage
            .decide_class_offering_impl(mine.id, DecisionAction::Approve)
            .await
            .unwrap();

        let page = storage
            .list_class_offerings_impl(ClassQueryParams {
                pagination: Default::default(),
                instructor_email: Some("t@test.dev".to_string()),
                status: Some(ApprovalStatus::Approved),
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Rust 101");

        // 删除课程不会级联
        assert!(storage.delete_class_offering_impl(mine.id).await.unwrap());
        assert!(!storage.delete_class_offering_impl(mine.id).await.unwrap());
    }
}
