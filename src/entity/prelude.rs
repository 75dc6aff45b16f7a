pub use super::announcements::Entity as Announcements;
pub use super::assignments::Entity as Assignments;
pub use super::classes::Entity as Classes;
pub use super::enrollments::Entity as Enrollments;
pub use super::submission_attachments::Entity as SubmissionAttachments;
pub use super::submissions::Entity as Submissions;
pub use super::users::Entity as Users;
