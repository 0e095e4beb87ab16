use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 审批状态：教师申请与课程共用同一生命周期
// pending -> approved / rejected，进入终态后不可再变更
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";

    /// 是否已进入终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Rejected)
    }
}

impl<'de> Deserialize<'de> for ApprovalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的审批状态: '{s}'")))
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "{}", ApprovalStatus::PENDING),
            ApprovalStatus::Approved => write!(f, "{}", ApprovalStatus::APPROVED),
            ApprovalStatus::Rejected => write!(f, "{}", ApprovalStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {s}")),
        }
    }
}

// 审批动作，来自路径参数 {action}
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecisionAction {
    Approve,
    Reject,
}

impl DecisionAction {
    /// 动作对应的目标状态
    pub fn target_status(&self) -> ApprovalStatus {
        match self {
            DecisionAction::Approve => ApprovalStatus::Approved,
            DecisionAction::Reject => ApprovalStatus::Rejected,
        }
    }
}

impl std::fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionAction::Approve => write!(f, "approve"),
            DecisionAction::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for DecisionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(DecisionAction::Approve),
            "reject" => Ok(DecisionAction::Reject),
            _ => Err(format!("Invalid action: {s}. 支持的动作: approve, reject")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_status_round_trip() {
        for s in ["pending", "approved", "rejected"] {
            let parsed: ApprovalStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("cancelled".parse::<ApprovalStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ApprovalStatus::Pending.is_terminal());
        assert!(ApprovalStatus::Approved.is_terminal());
        assert!(ApprovalStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_decision_action() {
        assert_eq!(
            "approve".parse::<DecisionAction>().unwrap().target_status(),
            ApprovalStatus::Approved
        );
        assert_eq!(
            "reject".parse::<DecisionAction>().unwrap().target_status(),
            ApprovalStatus::Rejected
        );
        assert!("delete".parse::<DecisionAction>().is_err());
    }
}
