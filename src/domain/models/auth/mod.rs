pub mod authenticated_member;
pub mod authentication_request;

pub use authenticated_member::*;
pub use authentication_request::*;
