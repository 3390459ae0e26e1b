//! Startup seeding of the configured administrator account.
//!
//! The account goes into the same [`ProfileStore`] as every other user, so
//! it authenticates through the normal Basic-auth path.

use anyhow::Context;
use tracing::info;

use account_master_config::AdminConfig;
use account_master_core::hash_password;
use account_master_models::{Profile, ProfileId};
use account_master_store::ProfileStore;

/// Hashes the configured password and inserts the account.
///
/// # Errors
///
/// Fails if hashing fails or the username is already taken.
pub async fn bootstrap_admin(
    store: &ProfileStore,
    admin: &AdminConfig,
) -> anyhow::Result<ProfileId> {
    let password = admin.password.clone();
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task failed")?
        .context("Failed to hash admin password")?;

    let id = store
        .create_user(Profile {
            id: ProfileId::new(),
            email: admin.email.clone(),
            username: admin.username.clone(),
            password: hash,
            admin: admin.admin,
        })
        .context("Failed to create admin user")?;

    info!(
        user_id = %id,
        username = %admin.username,
        admin = admin.admin,
        "Bootstrap account created"
    );

    Ok(id)
}
