pub mod base_response;
pub use base_response::*;
