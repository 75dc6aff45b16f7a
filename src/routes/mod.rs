pub mod announcements;
pub mod assignments;
pub mod classes;
pub mod docs;
pub mod enrollments;
pub mod submissions;
pub mod users;

pub use announcements::configure_announcements_routes;
pub use assignments::configure_assignments_routes;
pub use classes::configure_classes_routes;
pub use docs::configure_docs_routes;
pub use enrollments::configure_enrollments_routes;
pub use submissions::configure_submissions_routes;
pub use users::configure_user_routes;
