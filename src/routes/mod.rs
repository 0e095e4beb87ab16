pub mod assignments;

pub mod classes;

pub mod enrollments;

pub mod evaluations;

pub mod payments;

pub mod resources;

pub mod submissions;

pub mod system;

pub mod teacher_requests;

pub mod users;

pub use assignments::configure_assignments_routes;
pub use classes::configure_classes_routes;
pub use enrollments::configure_enrollments_routes;
pub use evaluations::configure_evaluations_routes;
pub use payments::configure_payments_routes;
pub use resources::configure_resources_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
pub use teacher_requests::configure_teacher_requests_routes;
pub use users::configure_user_routes;
