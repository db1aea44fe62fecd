pub mod oauth;
pub mod password;

pub use oauth::OAuthClient;
pub use password::Argon2CredentialHasher;
