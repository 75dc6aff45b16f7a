//! 选课存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{ClassHubError, Result};
use crate::models::enrollments::entities::Enrollment;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 学生选课
    pub async fn enroll_student_impl(&self, user_id: i64, class_id: i64) -> Result<Enrollment> {
        // user_id 必须指向学生角色的用户
        self.ensure_student(user_id).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            class_id: Set(class_id),
            enrolled_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("选课失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 列出选课记录（可按班级/学生过滤）
    pub async fn list_enrollments_impl(
        &self,
        class_id: Option<i64>,
        user_id: Option<i64>,
    ) -> Result<Vec<Enrollment>> {
        let mut select = Enrollments::find();

        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(user_id) = user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let results = select
            .order_by_asc(Column::ClassId)
            .order_by_asc(Column::UserId)
            .all(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 退课
    pub async fn unenroll_student_impl(&self, user_id: i64, class_id: i64) -> Result<bool> {
        let result = Enrollments::delete_many()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
