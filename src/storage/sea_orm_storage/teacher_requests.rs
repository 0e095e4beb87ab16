//! 教师申请存储操作

use super::SeaOrmStorage;
use crate::entity::teacher_requests::{ActiveModel, Column, Entity as TeacherRequests};
use crate::errors::{LearnifyError, Result};
use crate::models::{
    PaginationInfo,
    common::status::{ApprovalStatus, DecisionAction},
    teacher_requests::{
        entities::TeacherRequest,
        requests::{SubmitTeacherRequestRequest, TeacherRequestQueryParams},
        responses::TeacherRequestListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 提交教师申请，初始状态 pending
    pub async fn create_teacher_request_impl(
        &self,
        req: SubmitTeacherRequestRequest,
    ) -> Result<TeacherRequest> {
        let now = chrono::Utc::now().timestamp();

        let details = if req.details.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&req.details)?)
        };

        let model = ActiveModel {
            instructor_email: Set(req.instructor_email),
            category: Set(req.category),
            experience: Set(req.experience),
            details: Set(details),
            status: Set(ApprovalStatus::Pending.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("提交教师申请失败: {e}")))?;

        Ok(result.into_teacher_request())
    }

    /// 分页列出教师申请，筛选条件 AND 叠加
    pub async fn list_teacher_requests_impl(
        &self,
        query: TeacherRequestQueryParams,
    ) -> Result<TeacherRequestListResponse> {
        let (page, limit) = query.pagination.normalized();

        let mut select = TeacherRequests::find();

        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category));
        }

        if let Some(ref experience) = query.experience {
            select = select.filter(Column::Experience.eq(experience));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询申请总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询申请页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询申请列表失败: {e}")))?;

        Ok(TeacherRequestListResponse {
            items: items
                .into_iter()
                .map(|m| m.into_teacher_request())
                .collect(),
            pagination: PaginationInfo {
                total_pages: pages,
                current_page: page,
                total,
            },
        })
    }

    /// 审批教师申请
    ///
    /// 条件更新只命中 pending 记录：目标不存在或已进入终态时
    /// 影响行数为 0，与"不存在"在调用方不可区分，统一返回 None。
    pub async fn decide_teacher_request_impl(
        &self,
        id: i64,
        action: DecisionAction,
    ) -> Result<Option<TeacherRequest>> {
        let result = TeacherRequests::update_many()
            .col_expr(
                Column::Status,
                Expr::value(action.target_status().to_string()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(ApprovalStatus::Pending.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("审批教师申请失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let updated = TeacherRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询教师申请失败: {e}")))?;

        Ok(updated.map(|m| m.into_teacher_request()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::models::common::status::{ApprovalStatus, DecisionAction};
    use crate::models::teacher_requests::requests::SubmitTeacherRequestRequest;

    fn request(email: &str) -> SubmitTeacherRequestRequest {
        SubmitTeacherRequestRequest {
            instructor_email: email.to_string(),
            category: Some("programming".to_string()),
            experience: Some("senior".to_string()),
            details: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn test_approve_pending_request() {
        let storage = memory_storage().await;
        let created = storage
            .create_teacher_request_impl(request("t@test.dev"))
            .await
            .unwrap();
        assert_eq!(created.status, ApprovalStatus::Pending);

        let approved = storage
            .decide_teacher_request_impl(created.id, DecisionAction::Approve)
            .await
            .unwrap()
            .expect("pending request should transition");
        assert_eq!(approved.status, ApprovalStatus::Approved);
        assert_eq!(approved.instructor_email, "t@test.dev");
    }

    #[tokio::test]
    async fn test_decide_is_terminal() {
        let storage = memory_storage().await;
        let created = storage
            .create_teacher_request_impl(request("t@test.dev"))
            .await
            .unwrap();

        storage
            .decide_teacher_request_impl(created.id, DecisionAction::Approve)
            .await
            .unwrap()
            .unwrap();

        // 二次审批（无论方向）都命中不了 pending 记录
        let again = storage
            .decide_teacher_request_impl(created.id, DecisionAction::Reject)
            .await
            .unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_decide_missing_request() {
        let storage = memory_storage().await;
        let missing = storage
            .decide_teacher_request_impl(9999, DecisionAction::Approve)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_filters_are_anded() {
        let storage = memory_storage().await;
        storage
            .create_teacher_request_impl(request("a@test.dev"))
            .await
            .unwrap();
        let mut other = request("b@test.dev");
        other.category = Some("design".to_string());
        storage.create_teacher_request_impl(other).await.unwrap();

        let page = storage
            .list_teacher_requests_impl(
                crate::models::teacher_requests::requests::TeacherRequestQueryParams {
                    pagination: Default::default(),
                    category: Some("programming".to_string()),
                    experience: Some("senior".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].instructor_email, "a@test.dev");
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.pagination.total_pages, 1);
    }
}
