//! Password hashing

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plain-text password using argon2
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a plain-text password against the stored hash
pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash("hunter2-but-longer").expect("Failed to hash password");
        assert_ne!(hashed, "hunter2-but-longer");

        assert!(verify("hunter2-but-longer", &hashed).expect("Failed to verify"));
        assert!(!verify("wrong-password", &hashed).expect("Failed to verify"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash("same-password").expect("Failed to hash");
        let second = hash("same-password").expect("Failed to hash");
        assert_ne!(first, second);
    }
}
