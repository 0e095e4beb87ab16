pub mod assignments;
pub mod classes;
pub mod enrollments;
pub mod evaluations;
pub mod payments;
pub mod resources;
pub mod submissions;
pub mod teacher_requests;
pub mod users;

pub use assignments::AssignmentService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use evaluations::EvaluationService;
pub use payments::PaymentService;
pub use resources::ResourceService;
pub use submissions::SubmissionService;
pub use teacher_requests::TeacherRequestService;
pub use users::UserService;
