pub mod verification_repo;
pub use verification_repo::VerificationRepository;
