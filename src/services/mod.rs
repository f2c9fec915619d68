pub mod auth;
pub mod review;
pub mod submissions;

pub use auth::AuthService;
pub use review::ReviewService;
pub use submissions::SubmissionService;
