// Account credential hashing
//
// Argon2id with the crate defaults; the PHC string stored in users.password
// carries its own salt and parameters, so nothing else needs to be kept.

use anyhow::Result;
use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password for storage. Each call salts freshly, so the
/// same password never hashes to the same string twice.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {}", e))?;
    Ok(hashed.to_string())
}

/// Check a login attempt against the stored hash.
///
/// A wrong password is `Ok(false)`; a hash that cannot be parsed or verified
/// at all is an error, since that means the stored credential is corrupt.
pub fn verify_password(password: &str, stored: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| anyhow::anyhow!("Stored password hash is malformed: {}", e))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow::anyhow!("Password verification failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("correct horse battery", &hash).unwrap());
    }

    #[test]
    fn test_fresh_salt_per_hash() {
        let first = hash_password("seatline-user-pw").unwrap();
        let second = hash_password("seatline-user-pw").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("seatline-user-pw", &second).unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        // Not a mismatch: a garbage hash in the users table must surface
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
