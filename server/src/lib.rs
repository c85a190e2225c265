mod auth_routes;
mod blog_service;
mod config;

use std::sync::OnceLock;

use axum::Router;
use axum::http::HeaderMap;
use cookie::Cookie;
use dioxus::fullstack::FullstackContext;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use types::{
    Error, ModerationAction, Post, Result, SESSION_COOKIE_NAME, UserSession, decode_session, err,
};

use crate::auth_routes::auth_router;
pub use crate::blog_service::{AuthResponse, BlogService};
pub use crate::config::Config;

static CONFIG: OnceLock<Config> = OnceLock::new();
static BLOG_SERVICE: OnceLock<BlogService> = OnceLock::new();

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (tests, hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration, start logging, and build the non-Dioxus routes.
pub fn init() -> Result<Router> {
    let config = Config::load()?;
    init_tracing(&config.log_filter);

    tracing::info!(blog_service = %config.blog_service_url, "starting threadle");

    let config = CONFIG.get_or_init(|| config);
    BLOG_SERVICE.get_or_init(|| BlogService::new(config.blog_service_url.clone()));

    Ok(auth_router())
}

pub fn config() -> Result<&'static Config> {
    CONFIG.get().ok_or_else(|| err!("server is not initialized"))
}

pub fn blog_service() -> Result<&'static BlogService> {
    BLOG_SERVICE
        .get()
        .ok_or_else(|| err!("server is not initialized"))
}

fn session_from_headers(headers: &HeaderMap, secret: &SecretString) -> Result<UserSession> {
    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("no cookies in request"))?;

    let cookie = Cookie::split_parse(cookie_header)
        .flatten()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .ok_or_else(|| err!("session cookie not found"))?;

    decode_session(cookie.value(), secret)
}

/// Extract the user session from the request cookie.
pub async fn get_session_from_cookie() -> Result<UserSession> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|e| err!("failed to read request headers: {e}"))?;

    session_from_headers(&headers, &config()?.session_secret)
}

/// The session if the visitor is signed in, `None` otherwise.
pub async fn optional_session() -> Option<UserSession> {
    match get_session_from_cookie().await {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::trace!(%error, "no usable session");
            None
        }
    }
}

pub async fn require_session() -> Result<UserSession> {
    get_session_from_cookie()
        .await
        .map_err(|_| Error::unauthorized("you need to be signed in"))
}

/// Require an authenticated admin session, returning the session if valid.
pub async fn require_admin_session() -> Result<UserSession> {
    let session = require_session().await?;

    if !session.is_admin() {
        return Err(err!(
            "access denied: user '{}' is not an administrator",
            session.user.username
        ));
    }

    Ok(session)
}

/// Whether the session may look at `post`. Anyone can see published posts.
pub fn can_view(session: Option<&UserSession>, post: &Post) -> bool {
    post.is_published()
        || session.is_some_and(|s| s.is_admin() || s.user.username == post.author)
}

/// Whether the session may list the posts written by `user_id`.
pub fn can_list_posts_of(session: &UserSession, user_id: &str) -> bool {
    session.is_admin() || session.user.id == user_id
}

/// Admins may run any action. Authors may only withdraw their own pending posts.
fn authorize(session: &UserSession, post: &Post, action: ModerationAction) -> Result<()> {
    if session.is_admin() {
        return Ok(());
    }

    match action {
        ModerationAction::Delete if post.is_pending() && post.author == session.user.username => {
            Ok(())
        }
        ModerationAction::Delete if post.author == session.user.username => Err(err!(
            "access denied: only pending posts can be withdrawn"
        )),
        _ => Err(err!(
            "access denied: user '{}' may not {} this post",
            session.user.username,
            action.verb()
        )),
    }
}

/// Run a moderation action against the blog service.
///
/// The post is re-read first so a post that another admin has already
/// approved or rejected is never moved a second time.
pub async fn moderate(session: &UserSession, post_id: &str, action: ModerationAction) -> Result<()> {
    moderate_with(blog_service()?, session, post_id, action).await
}

async fn moderate_with(
    service: &BlogService,
    session: &UserSession,
    post_id: &str,
    action: ModerationAction,
) -> Result<()> {
    let token = &session.access_token;

    let post = service.get_post(Some(token), post_id).await?;
    authorize(session, &post, action)?;
    let next = action.apply(post.status)?;

    match action {
        ModerationAction::Approve => service.approve_post(token, post_id).await?,
        ModerationAction::Reject => service.reject_post(token, post_id).await?,
        ModerationAction::Delete => service.delete_post(token, post_id).await?,
    }

    tracing::info!(
        post_id,
        user = %session.user.username,
        action = action.verb(),
        from = %post.status,
        to = next.map(|s| s.label()).unwrap_or("deleted"),
        "moderated post"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;
    use types::{PostStatus, User, encode_session};

    use super::*;
    use crate::blog_service::stub::{recorded, stub};

    fn session(username: &str, is_admin: bool) -> UserSession {
        UserSession {
            user: User {
                id: format!("{username}-id"),
                username: username.into(),
                email: format!("{username}@example.com"),
                is_admin,
                created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            },
            access_token: SecretString::from("tok"),
        }
    }

    fn post(author: &str, status: PostStatus) -> Post {
        Post {
            id: "p1".into(),
            title: "t".into(),
            author: author.into(),
            snippet: String::new(),
            content: None,
            status,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            likes: 0,
            comments: vec![],
        }
    }

    #[test]
    fn finds_the_session_among_other_cookies() {
        let secret = SecretString::from("s");
        let encoded = encode_session(&session("ada", false), &secret).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE_NAME}={encoded}; x=1"))
                .unwrap(),
        );

        let found = session_from_headers(&headers, &secret).unwrap();
        assert_eq!(found.user.username, "ada");
    }

    #[test]
    fn missing_cookie_is_an_error() {
        let mut headers = HeaderMap::new();
        headers.insert(axum::http::header::COOKIE, HeaderValue::from_static("theme=dark"));

        let error = session_from_headers(&headers, &SecretString::from("s")).unwrap_err();
        assert_eq!(error.message, "session cookie not found");
        assert!(session_from_headers(&HeaderMap::new(), &SecretString::from("s")).is_err());
    }

    #[test]
    fn unpublished_posts_are_private() {
        let pending = post("ada", PostStatus::Pending);

        assert!(can_view(None, &post("ada", PostStatus::Published)));
        assert!(!can_view(None, &pending));
        assert!(can_view(Some(&session("ada", false)), &pending));
        assert!(!can_view(Some(&session("bo", false)), &pending));
        assert!(can_view(Some(&session("root", true)), &pending));
    }

    #[test]
    fn admins_may_moderate_anything() {
        let admin = session("root", true);
        for action in [ModerationAction::Approve, ModerationAction::Reject, ModerationAction::Delete] {
            assert!(authorize(&admin, &post("ada", PostStatus::Pending), action).is_ok());
        }
    }

    #[test]
    fn authors_may_only_withdraw_pending_posts() {
        let ada = session("ada", false);

        assert!(authorize(&ada, &post("ada", PostStatus::Pending), ModerationAction::Delete).is_ok());
        assert!(authorize(&ada, &post("ada", PostStatus::Published), ModerationAction::Delete).is_err());
        assert!(authorize(&ada, &post("bo", PostStatus::Pending), ModerationAction::Delete).is_err());

        let error = authorize(&ada, &post("ada", PostStatus::Pending), ModerationAction::Approve)
            .unwrap_err();
        assert_eq!(error.message, "access denied: user 'ada' may not approve this post");
    }

    #[test]
    fn authors_list_only_their_own_posts() {
        let ada = session("ada", false);

        assert!(can_list_posts_of(&ada, "ada-id"));
        assert!(!can_list_posts_of(&ada, "bo-id"));
        assert!(can_list_posts_of(&session("root", true), "bo-id"));
    }

    #[tokio::test]
    async fn approving_a_pending_post_reads_then_patches() {
        let (service, calls) = stub().await;

        moderate_with(&service, &session("root", true), "a", ModerationAction::Approve)
            .await
            .unwrap();

        assert_eq!(
            recorded(&calls),
            vec!["get a [Bearer tok]".to_string(), "approve a [Bearer tok]".to_string()]
        );
    }

    #[tokio::test]
    async fn published_posts_are_never_approved_again() {
        let (service, calls) = stub().await;

        let error = moderate_with(
            &service,
            &session("root", true),
            "published-1",
            ModerationAction::Approve,
        )
        .await
        .unwrap_err();

        assert_eq!(error.message, "cannot approve a post that is already published");
        assert_eq!(recorded(&calls), vec!["get published-1 [Bearer tok]".to_string()]);
    }

    #[tokio::test]
    async fn a_failed_lookup_stops_the_action() {
        let (service, calls) = stub().await;

        let error = moderate_with(&service, &session("root", true), "missing", ModerationAction::Delete)
            .await
            .unwrap_err();

        assert_eq!(error.message, "blog service returned 404 Not Found: Blog not found");
        assert_eq!(recorded(&calls), vec!["get missing [Bearer tok]".to_string()]);
    }

    #[tokio::test]
    async fn authors_withdraw_their_pending_posts_but_not_others() {
        let (service, calls) = stub().await;

        moderate_with(&service, &session("ada", false), "a", ModerationAction::Delete)
            .await
            .unwrap();
        let error = moderate_with(&service, &session("bo", false), "b", ModerationAction::Delete)
            .await
            .unwrap_err();

        assert_eq!(error.message, "access denied: user 'bo' may not delete this post");
        assert_eq!(
            recorded(&calls),
            vec![
                "get a [Bearer tok]".to_string(),
                "delete a [Bearer tok]".to_string(),
                "get b [Bearer tok]".to_string(),
            ]
        );
    }
}
