//! 关系约束校验函数
//!
//! 原始 SQLite 模式通过 BEFORE INSERT 触发器保证的角色与关联约束，
//! 在这里以显式校验函数实现（触发器语法依赖具体引擎）。写操作在执行
//! 语句前调用对应函数，校验失败返回 `ConstraintViolation` 并中止操作：
//!
//! - 班级的 teacher_id 必须指向角色为 teacher 的用户
//! - 选课的 user_id 必须指向角色为 student 的用户
//! - 提交的学生必须选修作业所属班级
//! - 公告的 author_id 必须等于班级的 teacher_id

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::SeaOrmStorage;
use crate::entity::assignments::Entity as Assignments;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::users::Entity as Users;
use crate::errors::{ClassHubError, Result};
use crate::models::users::entities::UserRole;

impl SeaOrmStorage {
    /// classes.teacher_id 必须指向角色为 teacher 的用户
    pub(crate) async fn ensure_teacher(&self, user_id: i64) -> Result<()> {
        self.ensure_role(user_id, UserRole::Teacher).await
    }

    /// enrollments.user_id 与 submissions.student_id 必须指向角色为 student 的用户
    pub(crate) async fn ensure_student(&self, user_id: i64) -> Result<()> {
        self.ensure_role(user_id, UserRole::Student).await
    }

    async fn ensure_role(&self, user_id: i64, expected: UserRole) -> Result<()> {
        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询用户失败: {e}")))?;

        match user {
            None => Err(ClassHubError::constraint_violation(format!(
                "用户 {user_id} 不存在"
            ))),
            Some(u) if u.role != expected.to_string() => {
                Err(ClassHubError::constraint_violation(format!(
                    "用户 {user_id} 的角色为 {}，此处要求 {expected}",
                    u.role
                )))
            }
            Some(_) => Ok(()),
        }
    }

    /// 提交学生必须选修作业所属班级
    pub(crate) async fn ensure_enrolled(&self, student_id: i64, assignment_id: i64) -> Result<()> {
        let assignment = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询作业失败: {e}")))?
            .ok_or_else(|| {
                ClassHubError::constraint_violation(format!("作业 {assignment_id} 不存在"))
            })?;

        let enrolled = Enrollments::find()
            .filter(EnrollmentColumn::UserId.eq(student_id))
            .filter(EnrollmentColumn::ClassId.eq(assignment.class_id))
            .count(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询选课记录失败: {e}")))?;

        if enrolled == 0 {
            return Err(ClassHubError::constraint_violation(format!(
                "学生 {student_id} 未选修作业 {assignment_id} 所属班级"
            )));
        }
        Ok(())
    }

    /// 公告作者必须是班级的授课教师
    pub(crate) async fn ensure_class_teacher(&self, author_id: i64, class_id: i64) -> Result<()> {
        let class = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                ClassHubError::constraint_violation(format!("班级 {class_id} 不存在"))
            })?;

        if class.teacher_id != author_id {
            return Err(ClassHubError::constraint_violation(format!(
                "用户 {author_id} 不是班级 {class_id} 的授课教师"
            )));
        }
        Ok(())
    }

    /// 角色变更不得使既有行违反约束：
    /// 仍被班级引用的教师、仍有选课或提交记录的学生，角色保持不变
    pub(crate) async fn ensure_role_change_allowed(
        &self,
        user_id: i64,
        new_role: UserRole,
    ) -> Result<()> {
        if new_role != UserRole::Teacher {
            let teaching = Classes::find()
                .filter(ClassColumn::TeacherId.eq(user_id))
                .count(&self.db)
                .await
                .map_err(|e| ClassHubError::database_operation(format!("查询班级失败: {e}")))?;
            if teaching > 0 {
                return Err(ClassHubError::constraint_violation(format!(
                    "用户 {user_id} 仍是 {teaching} 个班级的授课教师，不能变更角色"
                )));
            }
        }

        if new_role != UserRole::Student {
            let enrollments = Enrollments::find()
                .filter(EnrollmentColumn::UserId.eq(user_id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    ClassHubError::database_operation(format!("查询选课记录失败: {e}"))
                })?;
            if enrollments > 0 {
                return Err(ClassHubError::constraint_violation(format!(
                    "用户 {user_id} 仍有 {enrollments} 条选课记录，不能变更角色"
                )));
            }

            let submissions = Submissions::find()
                .filter(SubmissionColumn::StudentId.eq(user_id))
                .count(&self.db)
                .await
                .map_err(|e| ClassHubError::database_operation(format!("查询提交失败: {e}")))?;
            if submissions > 0 {
                return Err(ClassHubError::constraint_violation(format!(
                    "用户 {user_id} 仍有 {submissions} 条提交记录，不能变更角色"
                )));
            }
        }

        Ok(())
    }
}
