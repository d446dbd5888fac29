pub mod principals;

pub mod students;

pub mod teachers;

pub use principals::configure_principal_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
