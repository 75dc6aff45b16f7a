//! 演示数据填充
//!
//! 按外键依赖顺序插入：用户 → 班级 → 选课 → 作业 → 提交 → 附件 → 公告。
//! 全部经由存储层写入，约束校验与正常请求路径一致；任何一条插入失败
//! 立即返回错误中止填充。

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::errors::Result;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::submissions::requests::{
    AddAttachmentRequest, CreateSubmissionRequest, GradeSubmissionRequest,
};
use crate::models::submissions::entities::AttachmentKind;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;

fn due(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

/// 填充演示数据集
pub async fn seed_demo_data(storage: &Arc<dyn Storage>) -> Result<()> {
    // 用户：2 名教师、3 名学生、1 名管理员
    let users = [
        ("teacher1@example.com", "Alice Teacher", UserRole::Teacher),
        ("teacher2@example.com", "Bob Instructor", UserRole::Teacher),
        ("student1@example.com", "Charlie Student", UserRole::Student),
        ("student2@example.com", "Diana Learner", UserRole::Student),
        ("student3@example.com", "Ethan Pupil", UserRole::Student),
        ("admin1@example.com", "Admin One", UserRole::Admin),
    ];

    let mut user_ids = Vec::with_capacity(users.len());
    for (email, full_name, role) in users {
        let user = storage
            .create_user(CreateUserRequest {
                email: email.to_string(),
                full_name: full_name.to_string(),
                role,
            })
            .await?;
        user_ids.push(user.id);
    }

    // 班级：每个班级一名授课教师
    let classes = [
        (
            "CS101",
            "Intro to Computer Science",
            "Basics of programming and algorithms",
            user_ids[0],
        ),
        (
            "MATH201",
            "Discrete Mathematics",
            "Logic, sets, combinatorics, and graphs",
            user_ids[1],
        ),
    ];

    let mut class_ids = Vec::with_capacity(classes.len());
    for (code, title, description, teacher_id) in classes {
        let class = storage
            .create_class(CreateClassRequest {
                code: code.to_string(),
                title: title.to_string(),
                description: Some(description.to_string()),
                teacher_id,
            })
            .await?;
        class_ids.push(class.id);
    }

    // 选课
    let enrollments = [
        (user_ids[2], class_ids[0]),
        (user_ids[3], class_ids[0]),
        (user_ids[4], class_ids[1]),
        (user_ids[2], class_ids[1]),
    ];
    for (user_id, class_id) in enrollments {
        storage.enroll_student(user_id, class_id).await?;
    }

    // 作业
    let assignments = [
        (
            class_ids[0],
            "Assignment 1",
            "Write a program for Fibonacci numbers",
            due(2025, 9, 1, 23, 59),
        ),
        (
            class_ids[0],
            "Assignment 2",
            "Implement bubble sort in any language",
            due(2025, 9, 10, 23, 59),
        ),
        (
            class_ids[1],
            "Homework 1",
            "Solve 10 problems on set theory",
            due(2025, 9, 5, 23, 59),
        ),
    ];

    let mut assignment_ids = Vec::with_capacity(assignments.len());
    for (class_id, title, description, due_at) in assignments {
        let assignment = storage
            .create_assignment(CreateAssignmentRequest {
                class_id,
                title: title.to_string(),
                description: Some(description.to_string()),
                due_at,
            })
            .await?;
        assignment_ids.push(assignment.id);
    }

    // 提交：已评分的附带分数与评语
    let submissions = [
        (assignment_ids[0], user_ids[2], Some(90.0), "Excellent work"),
        (
            assignment_ids[0],
            user_ids[3],
            Some(75.0),
            "Good effort, optimize your code",
        ),
        (assignment_ids[1], user_ids[2], Some(88.0), "Well done"),
        (assignment_ids[2], user_ids[4], None, "Pending grading"),
    ];

    let mut submission_ids = Vec::with_capacity(submissions.len());
    for (assignment_id, student_id, grade, feedback) in submissions {
        let submission = storage
            .create_submission(CreateSubmissionRequest {
                assignment_id,
                student_id,
                attempt_number: Some(1),
                attachments: None,
            })
            .await?;
        if let Some(grade) = grade {
            storage
                .grade_submission(
                    submission.id,
                    GradeSubmissionRequest {
                        grade,
                        feedback: Some(feedback.to_string()),
                    },
                )
                .await?;
        }
        submission_ids.push(submission.id);
    }

    // 附件
    let attachments = [
        (submission_ids[0], AttachmentKind::File, "/uploads/charlie_fib.py"),
        (submission_ids[1], AttachmentKind::File, "/uploads/diana_fib.py"),
        (
            submission_ids[2],
            AttachmentKind::Url,
            "https://github.com/charlie/bubblesort",
        ),
        (submission_ids[3], AttachmentKind::File, "/uploads/ethan_sets.pdf"),
    ];
    for (submission_id, kind, value) in attachments {
        storage
            .add_attachment(AddAttachmentRequest {
                submission_id,
                kind,
                value: value.to_string(),
            })
            .await?;
    }

    // 公告：由各班级的授课教师发布
    let announcements = [
        (
            class_ids[0],
            user_ids[0],
            "Welcome to CS101",
            "Please install Python before the next class.",
        ),
        (
            class_ids[1],
            user_ids[1],
            "Welcome to Math201",
            "Bring your discrete math textbook. Homework will be weekly.",
        ),
    ];
    for (class_id, author_id, title, body) in announcements {
        storage
            .create_announcement(CreateAnnouncementRequest {
                class_id,
                author_id,
                title: title.to_string(),
                body: body.to_string(),
            })
            .await?;
    }

    info!(
        "Seeded {} users, {} classes, {} enrollments, {} assignments, {} submissions",
        user_ids.len(),
        class_ids.len(),
        enrollments.len(),
        assignment_ids.len(),
        submission_ids.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_builds_utc_timestamp() {
        let ts = due(2025, 9, 1, 23, 59);
        assert_eq!(ts.to_rfc3339(), "2025-09-01T23:59:00+00:00");
    }

    #[test]
    fn test_due_invalid_date_defaults() {
        assert_eq!(due(2025, 13, 1, 0, 0), DateTime::<Utc>::default());
    }
}
