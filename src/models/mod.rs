pub mod activity;
pub mod message;
pub mod signup;

pub use activity::{Activity, ActivityCatalog, ActivityDetails};
pub use message::{Severity, StatusMessage};
pub use signup::{SignupRequest, SignupResponse};
