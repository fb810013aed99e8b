/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Authentication and profile operations
//!
//! [`AuthService`] is the only service that touches the [`SessionStore`]:
//! login and profile reads write it, logout and an expired session clear it.
//! The session cookie itself lives in the transport's cookie jar.

use crate::application::services::crud::{
    ServiceError, ServiceResult, Success, internal_failure, request_failure,
};
use crate::error::AppError;
use crate::model::auth::{UserProfile, UserSession};
use crate::model::http::{ApiTransport, RequestOptions, extract_message_field};
use crate::model::requests::{
    ForgotPasswordRequest, LoginRequest, ProfileUpdateRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::model::validation::{
    FormValidator, Rule, login_form, register_form, reset_password_form,
};
use crate::session::SessionStore;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Login endpoint
pub const LOGIN_ENDPOINT: &str = "/auth/login";
/// Logout endpoint
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
/// Sign up endpoint
pub const REGISTER_ENDPOINT: &str = "/auth/register";
/// Password recovery endpoint
pub const FORGOT_PASSWORD_ENDPOINT: &str = "/auth/forgot-password";
/// Password reset endpoint
pub const RESET_PASSWORD_ENDPOINT: &str = "/auth/reset-password";
/// Profile of the logged in user
pub const PROFILE_ENDPOINT: &str = "/usuarios/perfil";

/// Message reported by a successful login
pub const MSG_LOGIN: &str = "Inicio de sesión exitoso";
/// Message reported by logout
pub const MSG_LOGOUT: &str = "Sesión cerrada correctamente";
/// Message reported by a successful sign up
pub const MSG_REGISTERED: &str = "Registro exitoso. Ya puedes iniciar sesión";
/// Message reported by a profile update
pub const MSG_PROFILE_UPDATED: &str = "Perfil actualizado exitosamente";
/// Default message for a password recovery request
pub const MSG_FORGOT_PASSWORD: &str =
    "Si el correo está registrado, recibirás instrucciones para restablecer tu contraseña";
/// Default message for a password reset
pub const MSG_PASSWORD_RESET: &str = "Contraseña restablecida exitosamente";

/// Authentication, sign up, password recovery and profile
pub struct AuthService<T: ApiTransport> {
    client: Arc<T>,
    session: SessionStore,
}

impl<T: ApiTransport> AuthService<T> {
    /// Creates the service; `session` receives the logged in user
    pub fn new(client: Arc<T>, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Session store written by this service
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Logs in and stores the returned session
    ///
    /// The form is validated before anything is sent.
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<UserSession> {
        login_form().validate(&HashMap::from([("email", email), ("password", password)]))?;
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        info!("Logging in {}", request.email);

        let body = self.send(Method::POST, LOGIN_ENDPOINT, Some(&request)).await?;
        let session = UserSession::from_response(&body)
            .map_err(|e| internal_failure(LOGIN_ENDPOINT, e))?;
        self.session.save(&session)?;
        info!("Logged in as {} ({})", session.id, session.rol);
        Ok(Success::with_message(session, MSG_LOGIN))
    }

    /// Logs out
    ///
    /// The local session is cleared whatever the backend answers; a failed
    /// logout call is only logged.
    pub async fn logout(&self) -> ServiceResult<()> {
        let result = self
            .send(Method::POST, LOGOUT_ENDPOINT, None::<&Value>)
            .await;
        self.session.clear()?;
        if let Err(e) = result {
            warn!("Logout request failed, local session cleared anyway: {}", e);
        }
        Ok(Success::with_message((), MSG_LOGOUT))
    }

    /// Creates an account
    ///
    /// Does not log in.
    pub async fn register(&self, form: &RegisterRequest) -> ServiceResult<Value> {
        let telefono = form.telefono.as_deref().unwrap_or_default();
        register_form().validate(&HashMap::from([
            ("nombre", form.nombre.as_str()),
            ("email", form.email.as_str()),
            ("password", form.password.as_str()),
            ("confirm_password", form.confirm_password.as_str()),
            ("telefono", telefono),
        ]))?;
        info!("Registering {}", form.email);
        let body = self.send(Method::POST, REGISTER_ENDPOINT, Some(form)).await?;
        Ok(Success::with_message(body, MSG_REGISTERED))
    }

    /// Profile of the logged in user
    ///
    /// Refreshes the stored session. A 401 means the session expired and
    /// clears it.
    pub async fn get_profile(&self) -> ServiceResult<UserProfile> {
        let body = match self.send(Method::GET, PROFILE_ENDPOINT, None::<&Value>).await {
            Ok(body) => body,
            Err(e) => {
                if e.requires_login() {
                    info!("Session expired, clearing local session");
                    if let Err(clear_err) = self.session.clear() {
                        error!("Cannot clear session: {}", clear_err);
                    }
                }
                return Err(e);
            }
        };
        let profile = UserProfile::from_response(&body);
        self.refresh_session(&profile);
        Ok(Success::new(profile))
    }

    /// Updates the profile of the logged in user
    ///
    /// Only the present fields are sent. The stored session is refreshed from
    /// the response.
    pub async fn update_profile(&self, form: &ProfileUpdateRequest) -> ServiceResult<UserProfile> {
        let mut fields = HashMap::new();
        if let Some(nombre) = form.nombre.as_deref() {
            fields.insert("nombre", nombre);
        }
        if let Some(email) = form.email.as_deref() {
            fields.insert("email", email);
        }
        profile_form(&fields).validate(&fields)?;

        info!("Updating profile");
        let body = self.send(Method::PATCH, PROFILE_ENDPOINT, Some(form)).await?;
        let profile = UserProfile::from_response(&body);
        self.refresh_session(&profile);
        Ok(Success::with_message(profile, MSG_PROFILE_UPDATED))
    }

    /// Asks the backend to e-mail password reset instructions
    pub async fn forgot_password(&self, email: &str) -> ServiceResult<()> {
        FormValidator::new()
            .field("email", vec![Rule::Required, Rule::Email])
            .validate(&HashMap::from([("email", email)]))?;
        let request = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        let body = self
            .send(Method::POST, FORGOT_PASSWORD_ENDPOINT, Some(&request))
            .await?;
        let message =
            extract_message_field(&body).unwrap_or_else(|| MSG_FORGOT_PASSWORD.to_string());
        Ok(Success::with_message((), message))
    }

    /// Sets a new password using the token from the recovery e-mail
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
        confirm_password: &str,
    ) -> ServiceResult<()> {
        reset_password_form().validate(&HashMap::from([
            ("token", token),
            ("password", password),
            ("confirm_password", confirm_password),
        ]))?;
        let request = ResetPasswordRequest {
            token: token.trim().to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        let body = self
            .send(Method::POST, RESET_PASSWORD_ENDPOINT, Some(&request))
            .await?;
        let message =
            extract_message_field(&body).unwrap_or_else(|| MSG_PASSWORD_RESET.to_string());
        Ok(Success::with_message((), message))
    }

    fn refresh_session(&self, profile: &UserProfile) {
        let current = self.session.get();
        match profile.to_session(current.as_ref()) {
            Some(session) if current.as_ref() != Some(&session) => {
                if let Err(e) = self.session.save(&session) {
                    error!("Cannot refresh session: {}", e);
                }
            }
            Some(_) => {}
            None => warn!("Profile response carries no id or role, session not refreshed"),
        }
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ServiceError> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| internal_failure(path, AppError::from(e)))?;
        self.client
            .request(method.clone(), path, body, RequestOptions::default())
            .await
            .map_err(|e| request_failure(method.as_str(), path, e))
    }
}

/// Rules for the fields present in a profile update
fn profile_form(fields: &HashMap<&str, &str>) -> FormValidator {
    let mut validator = FormValidator::new();
    if fields.contains_key("nombre") {
        validator = validator.field("nombre", vec![Rule::Required, Rule::MinLength(2)]);
    }
    if fields.contains_key("email") {
        validator = validator.field("email", vec![Rule::Required, Rule::Email]);
    }
    validator
}
