use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let RegisterRequest {
        username,
        email,
        password,
        is_restaurant,
    } = payload;
    let username = username.trim().to_string();
    let email = email.trim().to_string();

    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".into()));
    }
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest("Email address is invalid".into()));
    }
    if password.is_empty() {
        return Err(AppError::BadRequest("Password is required".into()));
    }

    let existing = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let taken = Users::find()
        .filter(Column::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?;
    if taken.is_some() {
        return Err(AppError::Conflict("Username is already taken".into()));
    }

    let password_hash = hash_password(&password)?;

    let user = ActiveModel {
        id: NotSet,
        username: Set(username),
        email: Set(email),
        password_hash: Set(password_hash),
        is_restaurant: Set(is_restaurant),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = user.id, is_restaurant = user.is_restaurant, "user registered");
    Ok(ApiResponse::success("User created", User::from(user), None))
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<User>> {
    let LoginRequest { email, password } = payload;
    let user = Users::find()
        .filter(Column::Email.eq(email.trim()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::Unauthorized),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    tracing::debug!(user_id = user.id, "user logged in");
    Ok(ApiResponse::success(
        "Logged in",
        User::from(user),
        Some(Meta::empty()),
    ))
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("User"))?;
    Ok(ApiResponse::success("User", User::from(user), None))
}

/// Hash a password into an Argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC string. The comparison is constant-time.
pub fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2"));
        assert!(verify_password("hunter2", &first).unwrap());
        assert!(!verify_password("hunter3", &first).unwrap());
    }

    #[test]
    fn plaintext_stored_value_is_an_internal_error() {
        assert!(verify_password("secret", "secret").is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("rima@tayib.lb"));
        assert!(!is_valid_email("rima.tayib.lb"));
        assert!(!is_valid_email("@tayib.lb"));
        assert!(!is_valid_email("rima@localhost"));
        assert!(!is_valid_email("ri ma@tayib.lb"));
    }
}
