use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 附件类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Url,  // 外部链接
    File, // 文件路径
}

impl AttachmentKind {
    pub const URL: &'static str = "url";
    pub const FILE: &'static str = "file";
}

impl<'de> Deserialize<'de> for AttachmentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AttachmentKind::URL => Ok(AttachmentKind::Url),
            AttachmentKind::FILE => Ok(AttachmentKind::File),
            _ => Err(serde::de::Error::custom(format!(
                "无效的附件类型: '{s}'. 支持的类型: url, file"
            ))),
        }
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentKind::Url => write!(f, "{}", AttachmentKind::URL),
            AttachmentKind::File => write!(f, "{}", AttachmentKind::FILE),
        }
    }
}

impl std::str::FromStr for AttachmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(AttachmentKind::Url),
            "file" => Ok(AttachmentKind::File),
            _ => Err(format!("Invalid attachment kind: {s}")),
        }
    }
}

// 提交实体（同一学生对同一作业可多次提交，attempt_number 递增）
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub attempt_number: i32,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
}

// 提交附件实体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionAttachment {
    pub id: i64,
    pub submission_id: i64,
    pub kind: AttachmentKind,
    pub value: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [AttachmentKind::Url, AttachmentKind::File] {
            let parsed: AttachmentKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_kind_rejects_unknown() {
        assert!("ftp".parse::<AttachmentKind>().is_err());
        let parsed: Result<AttachmentKind, _> = serde_json::from_str(r#""ftp""#);
        assert!(parsed.is_err());
    }
}
