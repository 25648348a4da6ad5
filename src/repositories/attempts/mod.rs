pub mod attempt_repo;
pub use attempt_repo::{IpAddressAttemptRepository, LoginAttemptRepository};
