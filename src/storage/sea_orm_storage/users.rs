//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{LearnifyError, Result};
use crate::models::users::{
    entities::{User, UserRole},
    requests::RegisterUserRequest,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 注册用户，默认角色 student
    pub async fn create_user_impl(&self, req: RegisterUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            external_uid: Set(req.uid),
            name: Set(req.name),
            email: Set(req.email),
            photo_url: Set(req.photo),
            role: Set(UserRole::Student.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        // 唯一索引兜底：并发注册时落败方在这里拿到 Conflict
        let result = model.insert(&self.db).await.map_err(LearnifyError::from)?;

        Ok(result.into_user())
    }

    /// 通过外部UID获取用户
    pub async fn get_user_by_external_uid_impl(&self, uid: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::ExternalUid.eq(uid))
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过外部UID或邮箱获取用户
    pub async fn get_user_by_uid_or_email_impl(
        &self,
        uid: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::ExternalUid.eq(uid))
                    .add(Column::Email.eq(email)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 按邮箱筛选用户
    pub async fn get_users_by_email_impl(&self, email: &str) -> Result<Vec<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    /// 列出全部用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let result = Users::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    /// 按名称或邮箱模糊搜索
    pub async fn search_users_impl(&self, term: &str) -> Result<Vec<User>> {
        let escaped = escape_like_pattern(term.trim());

        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            )
            .all(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("搜索用户失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    /// 按存储ID设置角色
    pub async fn update_user_role_impl(&self, id: i64, role: UserRole) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(Column::Role, Expr::value(role.to_string()))
            .filter(Column::Id.eq(id))
            .filter(Column::Role.ne(role.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新用户角色失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按邮箱设置角色
    pub async fn update_user_role_by_email_impl(
        &self,
        email: &str,
        role: UserRole,
    ) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(Column::Role, Expr::value(role.to_string()))
            .filter(Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("更新用户角色失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::errors::LearnifyError;
    use crate::models::users::{entities::UserRole, requests::RegisterUserRequest};

    fn register(uid: &str, email: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            uid: uid.to_string(),
            name: "Test Student".to_string(),
            email: email.to_string(),
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_register_defaults_to_student() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(register("uid-1", "a@test.dev"))
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Student);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let storage = memory_storage().await;
        storage
            .create_user_impl(register("uid-1", "a@test.dev"))
            .await
            .unwrap();

        // 同一外部UID再次注册
        let err = storage
            .create_user_impl(register("uid-1", "b@test.dev"))
            .await
            .unwrap_err();
        assert!(matches!(err, LearnifyError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_promote_by_email() {
        let storage = memory_storage().await;
        storage
            .create_user_impl(register("uid-1", "a@test.dev"))
            .await
            .unwrap();

        let updated = storage
            .update_user_role_by_email_impl("a@test.dev", UserRole::Teacher)
            .await
            .unwrap();
        assert!(updated);

        let user = storage
            .get_user_by_external_uid_impl("uid-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, UserRole::Teacher);

        // 不存在的邮箱
        let missing = storage
            .update_user_role_by_email_impl("nobody@test.dev", UserRole::Teacher)
            .await
            .unwrap();
        assert!(!missing);
    }
}
