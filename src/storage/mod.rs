use std::sync::Arc;

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
    evaluations::{
        entities::Evaluation, requests::EvaluateRequest, responses::ReviewWithClass,
    },
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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 注册用户（外部UID或邮箱重复时返回 Conflict）
    async fn create_user(&self, user: RegisterUserRequest) -> Result<User>;
    // 通过外部UID获取用户
    async fn get_user_by_external_uid(&self, uid: &str) -> Result<Option<User>>;
    // 通过外部UID或邮箱获取用户（注册前的存在性检查）
    async fn get_user_by_uid_or_email(&self, uid: &str, email: &str) -> Result<Option<User>>;
    // 按邮箱筛选用户
    async fn get_users_by_email(&self, email: &str) -> Result<Vec<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 按名称或邮箱模糊搜索用户
    async fn search_users(&self, term: &str) -> Result<Vec<User>>;
    // 按存储ID设置角色
    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<bool>;
    // 按邮箱设置角色（审批通过后的提升走这里）
    async fn update_user_role_by_email(&self, email: &str, role: UserRole) -> Result<bool>;

    /// 教师申请方法
    // 提交申请，初始为 pending
    async fn create_teacher_request(
        &self,
        request: SubmitTeacherRequestRequest,
    ) -> Result<TeacherRequest>;
    // 分页列出申请
    async fn list_teacher_requests(
        &self,
        query: TeacherRequestQueryParams,
    ) -> Result<TeacherRequestListResponse>;
    // 审批：仅 pending 可转移到终态；目标不存在或已是终态时返回 None
    async fn decide_teacher_request(
        &self,
        id: i64,
        action: DecisionAction,
    ) -> Result<Option<TeacherRequest>>;

    /// 课程管理方法
    // 提交课程，初始为 pending，计数器归零
    async fn create_class_offering(&self, class: SubmitClassRequest) -> Result<ClassOffering>;
    // 通过ID获取课程
    async fn get_class_offering_by_id(&self, class_id: i64) -> Result<Option<ClassOffering>>;
    // 分页列出课程
    async fn list_class_offerings(&self, query: ClassQueryParams) -> Result<ClassListResponse>;
    // 列出全部课程（管理后台视图）
    async fn list_all_class_offerings(&self) -> Result<Vec<ClassOffering>>;
    // 更新课程的四个可编辑字段；目标不存在或没有实际变更时返回 None
    async fn update_class_offering(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<ClassOffering>>;
    // 删除课程（不级联子实体）
    async fn delete_class_offering(&self, class_id: i64) -> Result<bool>;
    // 审批课程，契约与教师申请一致
    async fn decide_class_offering(
        &self,
        class_id: i64,
        action: DecisionAction,
    ) -> Result<Option<ClassOffering>>;

    /// 选课方法
    // 选课：重复选课返回 Conflict；成功后课程 total_enrollment 加一
    async fn enroll(&self, class_id: i64, user_id: &str) -> Result<Enrollment>;
    // 学生的已选课程（课程详情 + 进度合并视图）
    async fn list_enrolled_courses(&self, user_id: &str) -> Result<Vec<EnrolledCourse>>;
    // 更新课程下选课记录的学习进度
    async fn update_progress(&self, class_id: i64, progress: f64) -> Result<bool>;

    /// 作业方法
    // 创建作业并递增课程 total_assignments
    async fn create_assignment(
        &self,
        class_id: i64,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 通过ID获取作业及其实时提交数
    async fn get_assignment_with_count(&self, id: i64) -> Result<Option<AssignmentWithCount>>;
    // 列出课程下作业及各自实时提交数
    async fn list_assignments_with_counts(&self, class_id: i64)
    -> Result<Vec<AssignmentWithCount>>;
    // 整体替换四个可编辑字段；目标不存在或没有实际变更时返回 None
    async fn update_assignment(
        &self,
        id: i64,
        request: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业：先删其全部提交，再删作业，最后递减课程 total_assignments
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 提交方法
    // 提交或重新提交：已存在则原地更新（不动评分），否则新建并递增课程 total_submissions
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        request: SubmitAssignmentRequest,
    ) -> Result<(Submission, bool)>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 评分
    async fn grade_submission(&self, id: i64, grade: f64, feedback: Option<String>)
    -> Result<bool>;
    // 教师视角：作业下全部提交 + 学生信息
    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionWithStudent>>;
    // 学生视角：其全部提交 + 作业/课程上下文
    async fn list_submissions_for_student(&self, user_id: &str)
    -> Result<Vec<StudentSubmission>>;

    /// 评价方法
    // 评价课程：重复评价返回 Conflict；成功后全量重算课程均分与评价数
    async fn evaluate_class(&self, class_id: i64, request: EvaluateRequest) -> Result<Evaluation>;
    // 全站评价信息流
    async fn list_all_reviews(&self) -> Result<Vec<ReviewWithClass>>;

    /// 课程资料方法
    async fn create_resource(
        &self,
        class_id: i64,
        request: CreateResourceRequest,
    ) -> Result<Resource>;
    async fn list_resources(&self, class_id: i64) -> Result<Vec<Resource>>;
    async fn delete_resource(&self, id: i64) -> Result<bool>;

    /// 支付方法
    // 写入支付事实记录（结算桩）
    async fn create_payment(&self, class_id: i64, user_id: &str, amount: f64) -> Result<Payment>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
