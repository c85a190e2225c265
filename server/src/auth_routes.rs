use axum::{
    Form, Router,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::{Cookie, SameSite};
use serde::Deserialize;
use types::{Result, SESSION_COOKIE_NAME, UserSession, encode_session};
use url::form_urlencoded;

use crate::{AuthResponse, blog_service, config};

pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/logout", get(logout))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct SignupForm {
    username: String,
    email: String,
    password: String,
}

async fn login(Form(form): Form<LoginForm>) -> Response {
    tracing::debug!("login attempt");

    let result = match blog_service() {
        Ok(service) => service.login(&form.email, &form.password).await,
        Err(e) => Err(e),
    };
    start_session(result, "/login")
}

async fn signup(Form(form): Form<SignupForm>) -> Response {
    tracing::info!(username = %form.username, "signup attempt");

    let result = match blog_service() {
        Ok(service) => {
            service
                .signup(&form.username, &form.email, &form.password)
                .await
        }
        Err(e) => Err(e),
    };
    start_session(result, "/signup")
}

/// Set the session cookie and go home, or bounce back to `retry_path` with the error.
fn start_session(result: Result<AuthResponse>, retry_path: &str) -> Response {
    match result.and_then(session_cookie) {
        Ok(cookie) => with_cookie(Redirect::to("/"), cookie),
        Err(error) => {
            tracing::warn!(%error, "authentication failed");
            Redirect::to(&error_redirect(retry_path, &error.message)).into_response()
        }
    }
}

fn session_cookie(auth: AuthResponse) -> Result<Cookie<'static>> {
    let config = config()?;
    let session = UserSession {
        user: auth.user,
        access_token: auth.token.into(),
    };
    tracing::info!(user = %session.user.username, admin = session.is_admin(), "signed in");

    let value = encode_session(&session, &config.session_secret)?;
    Ok(Cookie::build((SESSION_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .build())
}

fn error_redirect(path: &str, message: &str) -> String {
    let message: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{path}?error={message}")
}

fn with_cookie(redirect: Redirect, cookie: Cookie<'_>) -> Response {
    ([(SET_COOKIE, cookie.to_string())], redirect).into_response()
}

async fn logout() -> Response {
    // Clear the session cookie
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    with_cookie(Redirect::to("/"), cookie)
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use axum::http::{StatusCode, header::LOCATION};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn error_messages_are_query_encoded() {
        assert_eq!(
            error_redirect("/login", "blog service returned 401 Unauthorized: Invalid credentials"),
            "/login?error=blog+service+returned+401+Unauthorized%3A+Invalid+credentials"
        );
    }

    #[test]
    fn failed_login_redirects_back_with_the_error() {
        let response = start_session(Err("Invalid credentials".into()), "/login");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            "/login?error=Invalid+credentials"
        );
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn logout_expires_the_cookie() {
        let response = logout().await;

        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=;")));
        assert!(cookie.contains("Max-Age=0"));
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[test]
    fn login_attempts_do_not_log_the_email() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let response = tracing::subscriber::with_default(subscriber, || {
            tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap()
                .block_on(login(Form(LoginForm {
                    email: "ada@example.com".into(),
                    password: "hunter2".into(),
                })))
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("login attempt"));
        assert!(!logs.contains("ada@example.com"));
        assert!(!logs.contains("hunter2"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
