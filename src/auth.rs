//! Mock Authentication
//!
//! Simulated sign-in/sign-up with a fixed artificial delay. No credential is
//! stored or checked anywhere, and nothing is sent over the network; a real
//! flow can later replace these behind the same signatures.

use gloo_timers::future::TimeoutFuture;

use crate::models::User;

/// Artificial round-trip delay in milliseconds
const SIMULATED_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_sign_in(data: &SignInData) -> Result<(), String> {
    if data.email.is_empty() || data.password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

pub fn validate_sign_up(data: &SignUpData) -> Result<(), String> {
    if data.password != data.confirm_password {
        return Err("Passwords don't match".to_string());
    }
    if data.name.is_empty() || data.email.is_empty() || data.password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

fn local_user_id() -> String {
    format!("user_{}", js_sys::Date::now() as u64)
}

/// Simulated sign-in; the display name is derived from the email local part
pub async fn sign_in(data: &SignInData) -> Result<User, String> {
    validate_sign_in(data)?;
    TimeoutFuture::new(SIMULATED_DELAY_MS).await;
    let name = data
        .email
        .split('@')
        .next()
        .unwrap_or(&data.email)
        .to_string();
    Ok(User {
        id: local_user_id(),
        name,
        email: data.email.clone(),
    })
}

/// Simulated sign-up; requires matching password fields
pub async fn sign_up(data: &SignUpData) -> Result<User, String> {
    validate_sign_up(data)?;
    TimeoutFuture::new(SIMULATED_DELAY_MS).await;
    Ok(User {
        id: local_user_id(),
        name: data.name.clone(),
        email: data.email.clone(),
    })
}
