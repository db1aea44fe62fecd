use domainboard_domain::DomainError;

/// Password hashing and verification.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Constant-result verification: any mismatch or malformed hash is
    /// simply `false`.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
