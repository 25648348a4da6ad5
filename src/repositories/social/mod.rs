pub mod social_token_repo;
pub use social_token_repo::SocialTokenRepository;
