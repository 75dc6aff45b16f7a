//! 提交附件实体（URL 或文件路径）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submission_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub kind: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attachment(self) -> crate::models::submissions::entities::SubmissionAttachment {
        use crate::models::submissions::entities::{AttachmentKind, SubmissionAttachment};
        use chrono::{DateTime, Utc};

        SubmissionAttachment {
            id: self.id,
            submission_id: self.submission_id,
            kind: self.kind.parse::<AttachmentKind>().unwrap_or(AttachmentKind::Url),
            value: self.value,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
