use serde::{Deserialize, Serialize};

// 作业状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssignmentState {
    Draft,     // 草稿
    Submitted, // 已提交
    Graded,    // 已评分
}

impl AssignmentState {
    pub const DRAFT: &'static str = "DRAFT";
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const GRADED: &'static str = "GRADED";

    /// 状态在生命周期中的序号，只允许向前推进
    pub fn rank(&self) -> u8 {
        match self {
            AssignmentState::Draft => 0,
            AssignmentState::Submitted => 1,
            AssignmentState::Graded => 2,
        }
    }
}

impl<'de> Deserialize<'de> for AssignmentState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentState>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid assignment state: '{s}'. supported: DRAFT, SUBMITTED, GRADED"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentState::Draft => write!(f, "{}", AssignmentState::DRAFT),
            AssignmentState::Submitted => write!(f, "{}", AssignmentState::SUBMITTED),
            AssignmentState::Graded => write!(f, "{}", AssignmentState::GRADED),
        }
    }
}

impl std::str::FromStr for AssignmentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssignmentState::DRAFT => Ok(AssignmentState::Draft),
            AssignmentState::SUBMITTED => Ok(AssignmentState::Submitted),
            AssignmentState::GRADED => Ok(AssignmentState::Graded),
            _ => Err(format!("Invalid assignment state: {s}")),
        }
    }
}

// 成绩等级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            _ => Err(format!("Invalid grade: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 所属学生 ID，创建后不可变
    pub student_id: i64,
    // 提交时指定的教师 ID
    pub teacher_id: Option<i64>,
    // 作业内容
    pub content: Option<String>,
    // 成绩
    pub grade: Option<Grade>,
    // 当前状态
    pub state: AssignmentState,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trips_through_store_names() {
        for state in [
            AssignmentState::Draft,
            AssignmentState::Submitted,
            AssignmentState::Graded,
        ] {
            assert_eq!(state.to_string().parse::<AssignmentState>(), Ok(state));
        }
        assert!("draft".parse::<AssignmentState>().is_err());
    }

    #[test]
    fn test_state_rank_is_monotonic() {
        assert!(AssignmentState::Draft.rank() < AssignmentState::Submitted.rank());
        assert!(AssignmentState::Submitted.rank() < AssignmentState::Graded.rank());
    }

    #[test]
    fn test_state_serializes_uppercase() {
        let json = serde_json::to_string(&AssignmentState::Submitted).unwrap();
        assert_eq!(json, "\"SUBMITTED\"");
        let state: AssignmentState = serde_json::from_str("\"GRADED\"").unwrap();
        assert_eq!(state, AssignmentState::Graded);
        assert!(serde_json::from_str::<AssignmentState>("\"ARCHIVED\"").is_err());
    }

    #[test]
    fn test_grade_membership() {
        for (raw, grade) in [("A", Grade::A), ("B", Grade::B), ("C", Grade::C), ("D", Grade::D)] {
            assert_eq!(raw.parse::<Grade>(), Ok(grade));
            assert_eq!(grade.to_string(), raw);
        }
        assert!("Z".parse::<Grade>().is_err());
        assert!("a".parse::<Grade>().is_err());
    }
}
