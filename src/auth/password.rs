use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::thread_rng;

use crate::error::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::internal("Password hashing failed"))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(hash).map_err(|_| AppError::internal("Invalid password hash"))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Whether a stored credential already looks like a PHC-format hash.
/// The migration tool uses this to leave already-hashed rows alone.
pub fn is_hashed(stored: &str) -> bool {
    PasswordHash::new(stored).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("wonderland1").unwrap();
        assert!(is_hashed(&hash));
        assert!(verify_password("wonderland1", &hash).unwrap());
        assert!(!verify_password("wonderland2", &hash).unwrap());
    }

    #[test]
    fn plaintext_is_not_a_hash() {
        assert!(!is_hashed("hunter2"));
        assert!(verify_password("hunter2", "hunter2").is_err());
    }
}
