//! Signing secret provisioning.

use rand::rngs::OsRng;
use rand::RngCore;

use authhub_core::config::auth::AuthConfig;
use authhub_core::error::AppError;

/// Byte length of a freshly generated signing secret.
const SECRET_LEN: usize = 256;

/// Generates a signing secret into the config.
///
/// Refuses to overwrite an existing secret: rotating the secret
/// invalidates every outstanding token and must be an explicit
/// administrative action, not an accidental re-run.
pub fn generate_secret(config: &mut AuthConfig) -> Result<(), AppError> {
    if config.jwt_secret.is_some() {
        return Err(AppError::already_exists(
            "A JWT signing secret is already configured",
        ));
    }
    let mut bytes = [0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut bytes);
    config.jwt_secret = Some(hex::encode(bytes));
    Ok(())
}

/// Returns the configured signing secret as raw bytes.
///
/// Fails with `Configuration` when no secret is set or it is not valid
/// hex.
pub fn require_secret(config: &AuthConfig) -> Result<Vec<u8>, AppError> {
    let secret = config
        .jwt_secret
        .as_deref()
        .ok_or_else(|| AppError::configuration("No JWT signing secret is configured"))?;
    hex::decode(secret)
        .map_err(|_| AppError::configuration("JWT signing secret is not valid hex"))
}
