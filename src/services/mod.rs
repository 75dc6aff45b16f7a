pub mod announcements;
pub mod assignments;
pub mod classes;
pub mod enrollments;
pub mod submissions;
pub mod users;

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use submissions::SubmissionService;
pub use users::UserService;
