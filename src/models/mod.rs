//! 数据模型定义
//!
//! 按领域划分：每个领域下分 entities（业务实体）、requests（请求参数）、
//! responses（响应结构）。common 存放跨领域的通用结构。

pub mod common;

pub mod assignments;
pub mod classes;
pub mod enrollments;
pub mod evaluations;
pub mod payments;
pub mod resources;
pub mod submissions;
pub mod teacher_requests;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于健康检查接口的运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
///
/// 2xx/4xx/5xx 段与 HTTP 状态语义对应，1xxx 段为领域细分错误码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 200,
    BadRequest = 400,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,

    // 用户
    UserAlreadyExists = 1001,
    UserNotFound = 1002,
    UserEmailInvalid = 1003,
    UserRoleInvalid = 1004,
    UserCreationFailed = 1005,

    // 教师申请
    TeacherRequestNotFound = 1101,
    TeacherRequestSubmitFailed = 1102,
    InvalidAction = 1103,

    // 课程
    ClassNotFound = 1201,
    ClassSubmitFailed = 1202,
    ClassUpdateFailed = 1203,
    ClassDeleteFailed = 1204,

    // 选课
    AlreadyEnrolled = 1301,
    EnrollmentFailed = 1302,
    ProgressInvalid = 1303,

    // 作业
    AssignmentNotFound = 1401,
    AssignmentCreateFailed = 1402,
    AssignmentUpdateFailed = 1403,
    AssignmentDeleteFailed = 1404,

    // 提交
    SubmissionNotFound = 1501,
    SubmissionFailed = 1502,
    GradeInvalid = 1503,
    GradeFailed = 1504,

    // 评价
    AlreadyEvaluated = 1601,
    EvaluationFailed = 1602,
    RatingInvalid = 1603,

    // 课程资料
    ResourceNotFound = 1701,
    ResourceInvalid = 1702,

    // 支付
    PaymentDetailsInvalid = 1801,
    PaymentFailed = 1802,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 200);
        assert_eq!(ErrorCode::Conflict as i32, 409);
        assert_eq!(ErrorCode::AlreadyEnrolled as i32, 1301);
        assert_eq!(ErrorCode::PaymentDetailsInvalid as i32, 1801);
    }
}
