//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod class_offerings;
mod enrollments;
mod evaluations;
mod payments;
mod resources;
mod submissions;
mod teacher_requests;
mod users;

use crate::config::AppConfig;
use crate::errors::{LearnifyError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LearnifyError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LearnifyError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LearnifyError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LearnifyError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LearnifyError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentWithCount,
    },
    classes::{
        entities::ClassOffering,
        requests::{ClassQueryParams, SubmitClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    common::status::DecisionAction,
    enrollments::{entities::Enrollment, responses::EnrolledCourse},
    evaluations::{entities::Evaluation, requests::EvaluateRequest, responses::ReviewWithClass},
    payments::entities::Payment,
    resources::{entities::Resource, requests::CreateResourceRequest},
    submissions::{
        entities::Submission,
        requests::SubmitAssignmentRequest,
        responses::{StudentSubmission, SubmissionWithStudent},
    },
    teacher_requests::{
        entities::TeacherRequest,
        requests::{SubmitTeacherRequestRequest, TeacherRequestQueryParams},
        responses::TeacherRequestListResponse,
    },
    users::{entities::User, entities::UserRole, requests::RegisterUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: RegisterUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_external_uid(&self, uid: &str) -> Result<Option<User>> {
        self.get_user_by_external_uid_impl(uid).await
    }

    async fn get_user_by_uid_or_email(&self, uid: &str, email: &str) -> Result<Option<User>> {
        self.get_user_by_uid_or_email_impl(uid, email).await
    }

    async fn get_users_by_email(&self, email: &str) -> Result<Vec<User>> {
        self.get_users_by_email_impl(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn search_users(&self, term: &str) -> Result<Vec<User>> {
        self.search_users_impl(term).await
    }

    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<bool> {
        self.update_user_role_impl(id, role).await
    }

    async fn update_user_role_by_email(&self, email: &str, role: UserRole) -> Result<bool> {
        self.update_user_role_by_email_impl(email, role).await
    }

    // 教师申请模块
    async fn create_teacher_request(
        &self,
        request: SubmitTeacherRequestRequest,
    ) -> Result<TeacherRequest> {
        self.create_teacher_request_impl(request).await
    }

    async fn list_teacher_requests(
        &self,
        query: TeacherRequestQueryParams,
    ) -> Result<TeacherRequestListResponse> {
        self.list_teacher_requests_impl(query).await
    }

    async fn decide_teacher_request(
        &self,
        id: i64,
        action: DecisionAction,
    ) -> Result<Option<TeacherRequest>> {
        self.decide_teacher_request_impl(id, action).await
    }

    // 课程模块
    async fn create_class_offering(&self, class: SubmitClassRequest) -> Result<ClassOffering> {
        self.create_class_offering_impl(class).await
    }

    async fn get_class_offering_by_id(&self, class_id: i64) -> Result<Option<ClassOffering>> {
        self.get_class_offering_by_id_impl(class_id).await
    }

    async fn list_class_offerings(&self, query: ClassQueryParams) -> Result<ClassListResponse> {
        self.list_class_offerings_impl(query).await
    }

    async fn list_all_class_offerings(&self) -> Result<Vec<ClassOffering>> {
        self.list_all_class_offerings_impl().await
    }

    async fn update_class_offering(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<ClassOffering>> {
        self.update_class_offering_impl(class_id, update).await
    }

    async fn delete_class_offering(&self, class_id: i64) -> Result<bool> {
        self.delete_class_offering_impl(class_id).await
    }

    async fn decide_class_offering(
        &self,
        class_id: i64,
        action: DecisionAction,
    ) -> Result<Option<ClassOffering>> {
        self.decide_class_offering_impl(class_id, action).await
    }

    // 选课模块
    async fn enroll(&self, class_id: i64, user_id: &str) -> Result<Enrollment> {
        self.enroll_impl(class_id, user_id).await
    }

    async fn list_enrolled_courses(&self, user_id: &str) -> Result<Vec<EnrolledCourse>> {
        self.list_enrolled_courses_impl(user_id).await
    }

    async fn update_progress(&self, class_id: i64, progress: f64) -> Result<bool> {
        self.update_progress_impl(class_id, progress).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        class_id: i64,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(class_id, request).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn get_assignment_with_count(&self, id: i64) -> Result<Option<AssignmentWithCount>> {
        self.get_assignment_with_count_impl(id).await
    }

    async fn list_assignments_with_counts(
        &self,
        class_id: i64,
    ) -> Result<Vec<AssignmentWithCount>> {
        self.list_assignments_with_counts_impl(class_id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        request: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, request).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        request: SubmitAssignmentRequest,
    ) -> Result<(Submission, bool)> {
        self.upsert_submission_impl(assignment_id, request).await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn grade_submission(
        &self,
        id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<bool> {
        self.grade_submission_impl(id, grade, feedback).await
    }

    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionWithStudent>> {
        self.list_submissions_for_assignment_impl(assignment_id)
            .await
    }

    async fn list_submissions_for_student(
        &self,
        user_id: &str,
    ) -> Result<Vec<StudentSubmission>> {
        self.list_submissions_for_student_impl(user_id).await
    }

    // 评价模块
    async fn evaluate_class(&self, class_id: i64, request: EvaluateRequest) -> Result<Evaluation> {
        self.evaluate_class_impl(class_id, request).await
    }

    async fn list_all_reviews(&self) -> Result<Vec<ReviewWithClass>> {
        self.list_all_reviews_impl().await
    }

    // 课程资料模块
    async fn create_resource(
        &self,
        class_id: i64,
        request: CreateResourceRequest,
    ) -> Result<Resource> {
        self.create_resource_impl(class_id, request).await
    }

    async fn list_resources(&self, class_id: i64) -> Result<Vec<Resource>> {
        self.list_resources_impl(class_id).await
    }

    async fn delete_resource(&self, id: i64) -> Result<bool> {
        self.delete_resource_impl(id).await
    }

    // 支付模块
    async fn create_payment(&self, class_id: i64, user_id: &str, amount: f64) -> Result<Payment> {
        self.create_payment_impl(class_id, user_id, amount).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SeaOrmStorage;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    /// 基于内存 SQLite 的存储实例，迁移与生产共用同一套 schema
    ///
    /// 连接池固定为单连接：每个 SQLite 内存库绑定在各自的连接上，
    /// 多连接会各自看到一个空库。
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);

        let db = Database::connect(opt)
            .await
            .expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage { db }
    }
}
