use serde::Deserialize;
use ts_rs::TS;

// 提交作业请求，文本和链接至少提供其一即可，缺省按空串处理
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    pub user_id: String,
    pub submission_text: Option<String>,
    pub submission_url: Option<String>,
}

// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub grade: f64,
    pub feedback: Option<String>,
}
