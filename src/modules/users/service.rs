use anyhow::anyhow;
use tracing::{info, instrument};

use account_master_core::{AppError, hash_password};
use account_master_models::{CreateUserDto, ProfileId, UpdateUserDto, UserResponse};
use account_master_store::{ProfileStore, StoreError};

/// Maps store failures onto transport errors.
fn store_error(err: StoreError) -> AppError {
    match err {
        err if err.is_not_found() => AppError::not_found(anyhow!("User not found")),
        StoreError::DuplicateUsername(username) => {
            AppError::conflict(anyhow!("User {} already exists", username))
        }
        err => AppError::internal(err),
    }
}

/// bcrypt is deliberately slow, so it runs off the async workers.
async fn hash_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)
}

pub struct UserService;

impl UserService {
    #[instrument(skip(store, dto), fields(username = %dto.username))]
    pub async fn create_user(
        store: &ProfileStore,
        dto: CreateUserDto,
    ) -> Result<UserResponse, AppError> {
        let password_hash = hash_blocking(dto.password.clone()).await?;

        let profile = dto.into_profile(password_hash);
        let id = store.create_user(profile.clone()).map_err(store_error)?;
        info!(user_id = %id, "User created");

        Ok(UserResponse {
            id,
            ..profile.into()
        })
    }

    pub fn get_users(store: &ProfileStore) -> Vec<UserResponse> {
        store.users().into_iter().map(UserResponse::from).collect()
    }

    pub fn get_user(store: &ProfileStore, id: ProfileId) -> Result<UserResponse, AppError> {
        store
            .user_by_id(id)
            .map(UserResponse::from)
            .map_err(store_error)
    }

    #[instrument(skip(store, dto))]
    pub async fn update_user(
        store: &ProfileStore,
        id: ProfileId,
        dto: UpdateUserDto,
    ) -> Result<UserResponse, AppError> {
        let password_hash = match dto.new_password() {
            Some(password) => Some(hash_blocking(password.to_string()).await?),
            None => None,
        };

        let profile = store
            .update_user(id, &dto.into_patch(password_hash))
            .map_err(store_error)?;
        info!(user_id = %id, "User updated");

        Ok(profile.into())
    }

    #[instrument(skip(store))]
    pub fn delete_user(store: &ProfileStore, id: ProfileId) -> Result<(), AppError> {
        store.delete_user(id).map_err(store_error)?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
