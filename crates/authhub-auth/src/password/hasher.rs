//! scrypt password hashing and verification.
//!
//! The KDF is deliberately slow and memory-hard to resist offline brute
//! force; a fast hash here would be a security defect, not a
//! performance win. Hash and salt are handled as separate byte
//! sequences because the store keeps them in separate fields.

use rand::RngCore;
use rand::rngs::OsRng;
use scrypt::Params;

use authhub_core::error::AppError;
use authhub_entity::credential::HASH_LEN;

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

/// scrypt cost parameter, log2(N) for N=16384.
const LOG_N: u8 = 14;
/// scrypt block size parameter.
const R: u32 = 8;
/// scrypt parallelism parameter.
const P: u32 = 1;

/// Handles password hashing and verification using scrypt.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a new password hasher with the standard cost parameters
    /// (N=16384, r=8, p=1, 32-byte output).
    pub fn new() -> Self {
        // The parameters are compile-time constants; Params::new only
        // fails on out-of-range values.
        let params = Params::new(LOG_N, R, P, HASH_LEN)
            .unwrap_or_else(|_| Params::recommended());
        Self { params }
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Returns the derived hash and the salt it was derived with. The
    /// raw password is neither logged nor retained.
    pub fn hash_password(&self, password: &str) -> Result<([u8; HASH_LEN], Vec<u8>), AppError> {
        let mut salt = vec![0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let hash = self.derive(password, &salt)?;
        Ok((hash, salt))
    }

    /// Verifies a plaintext password against a stored hash and its salt.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// The comparison is a whole-value equality on fixed-length arrays;
    /// no early-exit string compare is exposed anywhere.
    pub fn verify_password(
        &self,
        password: &str,
        salt: &[u8],
        expected: &[u8; HASH_LEN],
    ) -> Result<bool, AppError> {
        let candidate = self.derive(password, salt)?;
        Ok(&candidate == expected)
    }

    /// Runs the KDF for the given password and salt.
    fn derive(&self, password: &str, salt: &[u8]) -> Result<[u8; HASH_LEN], AppError> {
        let mut out = [0u8; HASH_LEN];
        scrypt::scrypt(password.as_bytes(), salt, &self.params, &mut out)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(out)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_password_verifies() {
        let hasher = PasswordHasher::new();
        let (hash, salt) = hasher.hash_password("p@ss").unwrap();
        assert!(hasher.verify_password("p@ss", &salt, &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails() {
        let hasher = PasswordHasher::new();
        let (hash, salt) = hasher.hash_password("p@ss").unwrap();
        assert!(!hasher.verify_password("not-p@ss", &salt, &hash).unwrap());
        assert!(!hasher.verify_password("", &salt, &hash).unwrap());
    }

    #[test]
    fn salts_are_unique_even_for_identical_passwords() {
        let hasher = PasswordHasher::new();
        let (hash_a, salt_a) = hasher.hash_password("same").unwrap();
        let (hash_b, salt_b) = hasher.hash_password("same").unwrap();
        assert_ne!(salt_a, salt_b);
        assert_ne!(hash_a, hash_b);
    }
}
