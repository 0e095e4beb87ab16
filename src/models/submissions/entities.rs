use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Submitted, // 已提交（重新提交会回到该状态）
    Graded,    // 已评分
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的提交状态: '{s}'")))
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(SubmissionStatus::Submitted),
            "graded" => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交业务实体
// 同一 (assignment_id, user_id) 至多一条；重新提交原地更新，
// 已有的 grade / feedback 保持不变
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: String,
    pub submission_text: String,
    pub submission_url: String,
    pub status: SubmissionStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["submitted", "graded"] {
            let status: SubmissionStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("pending".parse::<SubmissionStatus>().is_err());
    }
}
