//! 约束模型集成测试
//!
//! 针对内存 SQLite 存储验证角色、选课与唯一性约束：
//! 所有校验走与正常请求相同的存储层路径。

use rust_classhub::errors::ClassHubError;
use rust_classhub::models::announcements::requests::CreateAnnouncementRequest;
use rust_classhub::models::assignments::requests::CreateAssignmentRequest;
use rust_classhub::models::classes::requests::CreateClassRequest;
use rust_classhub::models::submissions::requests::{
    AddAttachmentRequest, CreateSubmissionRequest,
};
use rust_classhub::models::submissions::entities::AttachmentKind;
use rust_classhub::models::users::entities::{User, UserRole};
use rust_classhub::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use rust_classhub::runtime::seed::seed_demo_data;
use rust_classhub::storage::Storage;
use rust_classhub::storage::sea_orm_storage::SeaOrmStorage;
use std::sync::Arc;

async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_url("sqlite::memory:")
        .await
        .expect("in-memory storage should initialize")
}

async fn create_user(storage: &SeaOrmStorage, email: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            email: email.to_string(),
            full_name: format!("Test {role}"),
            role,
        })
        .await
        .expect("user creation should succeed")
}

async fn create_class(storage: &SeaOrmStorage, code: &str, teacher_id: i64) -> i64 {
    storage
        .create_class(CreateClassRequest {
            code: code.to_string(),
            title: format!("Class {code}"),
            description: None,
            teacher_id,
        })
        .await
        .expect("class creation should succeed")
        .id
}

async fn create_assignment(storage: &SeaOrmStorage, class_id: i64) -> i64 {
    storage
        .create_assignment(CreateAssignmentRequest {
            class_id,
            title: "Assignment".to_string(),
            description: None,
            due_at: chrono::Utc::now() + chrono::Duration::days(7),
        })
        .await
        .expect("assignment creation should succeed")
        .id
}

fn assert_constraint_violation(err: ClassHubError) {
    assert!(
        err.is_constraint_violation(),
        "expected constraint violation, got: {err}"
    );
}

#[tokio::test]
async fn class_requires_teacher_role() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;

    // 教师建班成功，teacher_id 回读一致
    let class = storage
        .create_class(CreateClassRequest {
            code: "CS101".to_string(),
            title: "Intro".to_string(),
            description: None,
            teacher_id: teacher.id,
        })
        .await
        .expect("teacher-owned class should be created");
    assert_eq!(class.teacher_id, teacher.id);

    // 学生作为 teacher_id 必须被拒绝
    let err = storage
        .create_class(CreateClassRequest {
            code: "CS102".to_string(),
            title: "Broken".to_string(),
            description: None,
            teacher_id: student.id,
        })
        .await
        .expect_err("student-owned class must be rejected");
    assert_constraint_violation(err);

    // 不存在的用户同样被拒绝
    let err = storage
        .create_class(CreateClassRequest {
            code: "CS103".to_string(),
            title: "Ghost".to_string(),
            description: None,
            teacher_id: 9999,
        })
        .await
        .expect_err("missing teacher must be rejected");
    assert_constraint_violation(err);
}

#[tokio::test]
async fn class_update_revalidates_teacher_role() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;

    let err = storage
        .update_class(
            class_id,
            rust_classhub::models::classes::requests::UpdateClassRequest {
                code: None,
                title: None,
                description: None,
                teacher_id: Some(student.id),
            },
        )
        .await
        .expect_err("reassigning class to a student must be rejected");
    assert_constraint_violation(err);
}

#[tokio::test]
async fn enrollment_requires_student_role() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let admin = create_user(&storage, "a@example.com", UserRole::Admin).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;

    // 学生选课成功
    let enrollment = storage
        .enroll_student(student.id, class_id)
        .await
        .expect("student enrollment should succeed");
    assert_eq!(enrollment.user_id, student.id);
    assert_eq!(enrollment.class_id, class_id);

    // 教师与管理员都不能作为选课学生
    for uid in [teacher.id, admin.id] {
        let err = storage
            .enroll_student(uid, class_id)
            .await
            .expect_err("non-student enrollment must be rejected");
        assert_constraint_violation(err);
    }
}

#[tokio::test]
async fn duplicate_enrollment_is_rejected() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;

    storage.enroll_student(student.id, class_id).await.unwrap();
    let err = storage
        .enroll_student(student.id, class_id)
        .await
        .expect_err("double enrollment must hit the composite primary key");
    assert!(err.to_string().contains("UNIQUE constraint failed"));
}

#[tokio::test]
async fn submission_requires_enrollment() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let enrolled = create_user(&storage, "in@example.com", UserRole::Student).await;
    let outsider = create_user(&storage, "out@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;
    let assignment_id = create_assignment(&storage, class_id).await;

    storage.enroll_student(enrolled.id, class_id).await.unwrap();

    // 选课学生提交成功
    let submission = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: enrolled.id,
            attempt_number: None,
            attachments: None,
        })
        .await
        .expect("enrolled student submission should succeed");
    assert_eq!(submission.attempt_number, 1);

    // 未选课学生被拒绝
    let err = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: outsider.id,
            attempt_number: None,
            attachments: None,
        })
        .await
        .expect_err("unenrolled student submission must be rejected");
    assert_constraint_violation(err);

    // 教师不能作为提交学生
    let err = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: teacher.id,
            attempt_number: None,
            attachments: None,
        })
        .await
        .expect_err("teacher submission must be rejected");
    assert_constraint_violation(err);
}

#[tokio::test]
async fn submission_attempt_uniqueness() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;
    let assignment_id = create_assignment(&storage, class_id).await;
    storage.enroll_student(student.id, class_id).await.unwrap();

    storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: student.id,
            attempt_number: Some(1),
            attachments: None,
        })
        .await
        .expect("first attempt should succeed");

    // 相同 (assignment, student, attempt) 第二次插入必须失败
    let err = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: student.id,
            attempt_number: Some(1),
            attachments: None,
        })
        .await
        .expect_err("duplicate attempt must be rejected");
    assert!(err.to_string().contains("UNIQUE constraint failed"));

    // 省略 attempt_number 时自动取下一个次号
    let next = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: student.id,
            attempt_number: None,
            attachments: None,
        })
        .await
        .expect("auto-numbered attempt should succeed");
    assert_eq!(next.attempt_number, 2);
}

#[tokio::test]
async fn announcement_author_must_be_class_teacher() {
    let storage = memory_storage().await;
    let teacher1 = create_user(&storage, "t1@example.com", UserRole::Teacher).await;
    let teacher2 = create_user(&storage, "t2@example.com", UserRole::Teacher).await;
    let class_id = create_class(&storage, "CS101", teacher1.id).await;

    // 授课教师发布成功
    let announcement = storage
        .create_announcement(CreateAnnouncementRequest {
            class_id,
            author_id: teacher1.id,
            title: "Welcome".to_string(),
            body: "First lecture on Monday.".to_string(),
        })
        .await
        .expect("class teacher announcement should succeed");
    assert_eq!(announcement.author_id, teacher1.id);

    // 其他教师（非该班授课教师）被拒绝
    let err = storage
        .create_announcement(CreateAnnouncementRequest {
            class_id,
            author_id: teacher2.id,
            title: "Hijack".to_string(),
            body: "Not my class.".to_string(),
        })
        .await
        .expect_err("foreign teacher announcement must be rejected");
    assert_constraint_violation(err);
}

#[tokio::test]
async fn role_change_blocked_while_referenced() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;
    storage.enroll_student(student.id, class_id).await.unwrap();

    // 仍有班级的教师不能变为学生
    let err = storage
        .update_user(
            teacher.id,
            UpdateUserRequest {
                email: None,
                full_name: None,
                role: Some(UserRole::Student),
            },
        )
        .await
        .expect_err("teacher with classes must keep the teacher role");
    assert_constraint_violation(err);

    // 仍有选课记录的学生不能变为教师
    let err = storage
        .update_user(
            student.id,
            UpdateUserRequest {
                email: None,
                full_name: None,
                role: Some(UserRole::Teacher),
            },
        )
        .await
        .expect_err("enrolled student must keep the student role");
    assert_constraint_violation(err);
}

#[tokio::test]
async fn unique_email_is_enforced() {
    let storage = memory_storage().await;
    let original = create_user(&storage, "dup@example.com", UserRole::Student).await;

    let err = storage
        .create_user(CreateUserRequest {
            email: "dup@example.com".to_string(),
            full_name: "Other".to_string(),
            role: UserRole::Teacher,
        })
        .await
        .expect_err("duplicate email must be rejected");
    assert!(err.to_string().contains("UNIQUE constraint failed"));

    // 邮箱查找仍指向原始用户
    let found = storage
        .get_user_by_email("dup@example.com")
        .await
        .unwrap()
        .expect("original user should be found by email");
    assert_eq!(found.id, original.id);
}

#[tokio::test]
async fn attachments_follow_submission() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;
    let assignment_id = create_assignment(&storage, class_id).await;
    storage.enroll_student(student.id, class_id).await.unwrap();

    let submission = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: student.id,
            attempt_number: None,
            attachments: Some(vec![
                rust_classhub::models::submissions::requests::AttachmentInput {
                    kind: AttachmentKind::Url,
                    value: "https://example.com/solution".to_string(),
                },
            ]),
        })
        .await
        .unwrap();

    storage
        .add_attachment(AddAttachmentRequest {
            submission_id: submission.id,
            kind: AttachmentKind::File,
            value: "/uploads/solution.pdf".to_string(),
        })
        .await
        .unwrap();

    let attachments = storage
        .list_attachments(Some(submission.id))
        .await
        .unwrap();
    assert_eq!(attachments.len(), 2);

    // 指向不存在提交的附件被外键拒绝
    let err = storage
        .add_attachment(AddAttachmentRequest {
            submission_id: 9999,
            kind: AttachmentKind::Url,
            value: "https://example.com/ghost".to_string(),
        })
        .await
        .expect_err("attachment for missing submission must be rejected");
    assert!(err.to_string().contains("FOREIGN KEY constraint failed"));
}

#[tokio::test]
async fn grading_updates_submission() {
    let storage = memory_storage().await;
    let teacher = create_user(&storage, "t@example.com", UserRole::Teacher).await;
    let student = create_user(&storage, "s@example.com", UserRole::Student).await;
    let class_id = create_class(&storage, "CS101", teacher.id).await;
    let assignment_id = create_assignment(&storage, class_id).await;
    storage.enroll_student(student.id, class_id).await.unwrap();

    let submission = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: student.id,
            attempt_number: None,
            attachments: None,
        })
        .await
        .unwrap();
    assert!(submission.grade.is_none());

    let graded = storage
        .grade_submission(
            submission.id,
            rust_classhub::models::submissions::requests::GradeSubmissionRequest {
                grade: 92.5,
                feedback: Some("Well done".to_string()),
            },
        )
        .await
        .unwrap()
        .expect("graded submission should exist");
    assert_eq!(graded.grade, Some(92.5));
    assert_eq!(graded.feedback.as_deref(), Some("Well done"));
}

#[tokio::test]
async fn seed_respects_dependency_order() {
    let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);

    seed_demo_data(&storage)
        .await
        .expect("seeding a fresh database should succeed");

    // 填充后的数据满足全部关系约束
    let users = storage
        .list_users_with_pagination(rust_classhub::models::users::requests::UserListQuery {
            page: Some(1),
            size: Some(100),
            role: None,
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(users.pagination.total, 6);

    let classes = storage
        .list_classes_with_pagination(rust_classhub::models::classes::requests::ClassListQuery {
            page: Some(1),
            size: Some(100),
            teacher_id: None,
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(classes.pagination.total, 2);
    for class in &classes.items {
        let teacher = storage.get_user_by_id(class.teacher_id).await.unwrap();
        assert_eq!(teacher.unwrap().role, UserRole::Teacher);
    }

    let enrollments = storage.list_enrollments(None, None).await.unwrap();
    assert_eq!(enrollments.len(), 4);
    for enrollment in &enrollments {
        let student = storage.get_user_by_id(enrollment.user_id).await.unwrap();
        assert_eq!(student.unwrap().role, UserRole::Student);
    }

    // 重复填充在第一条冲突（邮箱唯一）处中止
    let err = seed_demo_data(&storage)
        .await
        .expect_err("re-seeding must abort on the first conflict");
    assert!(err.to_string().contains("UNIQUE constraint failed"));
}
