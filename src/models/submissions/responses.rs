use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::submissions::entities::Submission;

// 提交成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentResponse {
    pub submission_id: i64,
    // 首次提交为 true，重新提交为 false
    pub created: bool,
}

// 教师视角：提交 + 学生信息（按外部UID左连接，未匹配时字段缺省）
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_photo: Option<String>,
}

// 学生视角：提交 + 作业/课程上下文（两跳连接，中间文档缺失时字段缺省）
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StudentSubmission {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,
}
