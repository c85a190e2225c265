use anyhow::Context;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use types::{Post, Result, User, err};

trait ReqwestExt {
    async fn send_checked(self) -> Result<Response>;
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn send_checked(self) -> Result<Response> {
        let response = self
            .send()
            .await
            .context("blog service is unreachable")?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let body = response.bytes().await.unwrap_or_default();
        let reason = serde_json::from_slice::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());

        tracing::warn!(%status, %reason, "blog service request failed");
        if reason.is_empty() {
            Err(err!("blog service returned {status}"))
        } else {
            Err(err!("blog service returned {status}: {reason}"))
        }
    }

    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let body = self
            .send_checked()
            .await?
            .bytes()
            .await
            .context("failed to read blog service response")?;

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                tracing::debug!(?error, body = %String::from_utf8_lossy(&body), "failed to parse response");
                Err(anyhow::Error::from(error)
                    .context("unexpected blog service response")
                    .into())
            }
        }
    }
}

/// What the blog service hands back after a successful login or signup.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// HTTP client for the remote blog API.
#[derive(Clone, Debug)]
pub struct BlogService {
    client: Client,
    base_url: Url,
}

impl BlogService {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// `base_url` joined with `segments`, each one percent-encoded. Any path on
    /// the base URL is kept, with or without a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| err!("blog service URL {} cannot be a base", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&SecretString>,
    ) -> Result<RequestBuilder> {
        let builder = self.client.request(method, self.endpoint(segments)?);
        Ok(match token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        })
    }

    fn get(&self, segments: &[&str], token: Option<&SecretString>) -> Result<RequestBuilder> {
        self.request(Method::GET, segments, token)
    }

    fn post(&self, segments: &[&str], token: Option<&SecretString>) -> Result<RequestBuilder> {
        self.request(Method::POST, segments, token)
    }

    fn patch(&self, segments: &[&str], token: &SecretString) -> Result<RequestBuilder> {
        self.request(Method::PATCH, segments, Some(token))
    }

    fn delete(&self, segments: &[&str], token: &SecretString) -> Result<RequestBuilder> {
        self.request(Method::DELETE, segments, Some(token))
    }

    /// Every post the caller may see, regardless of status.
    pub async fn list_posts(&self, token: Option<&SecretString>) -> Result<Vec<Post>> {
        self.get(&["api", "blogs"], token)?.try_send().await
    }

    pub async fn list_user_posts(&self, token: &SecretString, user_id: &str) -> Result<Vec<Post>> {
        self.get(&["api", "blogs", "user", user_id], Some(token))?
            .try_send()
            .await
    }

    pub async fn get_post(&self, token: Option<&SecretString>, post_id: &str) -> Result<Post> {
        self.get(&["api", "blogs", post_id], token)?
            .try_send()
            .await
    }

    pub async fn create_post(&self, token: &SecretString, title: &str, content: &str) -> Result<Post> {
        self.post(&["api", "blogs"], Some(token))?
            .json(&json!({ "title": title, "content": content }))
            .try_send()
            .await
    }

    pub async fn approve_post(&self, token: &SecretString, post_id: &str) -> Result<()> {
        self.patch(&["api", "blogs", post_id, "approve"], token)?
            .send_checked()
            .await?;
        Ok(())
    }

    pub async fn reject_post(&self, token: &SecretString, post_id: &str) -> Result<()> {
        self.patch(&["api", "blogs", post_id, "reject"], token)?
            .send_checked()
            .await?;
        Ok(())
    }

    pub async fn delete_post(&self, token: &SecretString, post_id: &str) -> Result<()> {
        self.delete(&["api", "blogs", post_id], token)?
            .send_checked()
            .await?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.post(&["api", "auth", "login"], None)?
            .json(&json!({ "email": email, "password": password }))
            .try_send()
            .await
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse> {
        self.post(&["api", "auth", "signup"], None)?
            .json(&json!({ "username": username, "email": email, "password": password }))
            .try_send()
            .await
    }
}

/// A local stand-in for the blog service that records every call it gets.
#[cfg(test)]
pub(crate) mod stub {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        routing::{get, patch},
    };
    use serde_json::{Value, json};

    use super::*;

    pub(crate) type Calls = Arc<Mutex<Vec<String>>>;

    fn post_json(id: &str, status: &str) -> Value {
        json!({
            "_id": id,
            "title": format!("post {id}"),
            "author": "ada",
            "snippet": "...",
            "status": status,
            "createdAt": "2024-06-01T08:00:00.000Z",
            "likes": ["u1"],
            "comments": []
        })
    }

    fn record(calls: &Calls, headers: &HeaderMap, what: String) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();
        calls.lock().unwrap().push(format!("{what} [{auth}]"));
    }

    pub(crate) fn token() -> SecretString {
        SecretString::from("tok")
    }

    pub(crate) fn recorded(calls: &Calls) -> Vec<String> {
        calls.lock().unwrap().clone()
    }

    /// Ids starting with `published` come back published, `missing` is a 404,
    /// anything else is a pending post by `ada`.
    pub(crate) async fn stub() -> (BlogService, Calls) {
        let calls = Calls::default();

        let app = Router::new()
            .route(
                "/api/blogs",
                get(|State(calls): State<Calls>, headers: HeaderMap| async move {
                    record(&calls, &headers, "list".into());
                    Json(json!([post_json("a", "pending"), post_json("b", "published")]))
                }),
            )
            .route(
                "/api/blogs/{id}",
                get(|State(calls): State<Calls>, headers: HeaderMap, Path(id): Path<String>| async move {
                    record(&calls, &headers, format!("get {id}"));
                    if id == "missing" {
                        return Err((StatusCode::NOT_FOUND, Json(json!({ "message": "Blog not found" }))));
                    }
                    let status = if id.starts_with("published") { "published" } else { "pending" };
                    Ok(Json(post_json(&id, status)))
                })
                .delete(|State(calls): State<Calls>, headers: HeaderMap, Path(id): Path<String>| async move {
                    record(&calls, &headers, format!("delete {id}"));
                    StatusCode::NO_CONTENT
                }),
            )
            .route(
                "/api/blogs/{id}/approve",
                patch(|State(calls): State<Calls>, headers: HeaderMap, Path(id): Path<String>| async move {
                    record(&calls, &headers, format!("approve {id}"));
                    Json(json!({ "message": "Blog approved", "blog": post_json(&id, "published") }))
                }),
            )
            .route(
                "/api/blogs/{id}/reject",
                patch(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .with_state(calls.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let base_url = Url::parse(&format!("http://{addr}")).unwrap();
        (BlogService::new(base_url), calls)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use types::PostStatus;

    use super::stub::{recorded, stub, token};
    use super::*;

    fn service_at(base: &str) -> BlogService {
        BlogService::new(Url::parse(base).unwrap())
    }

    #[test]
    fn endpoints_stay_under_the_base_path() {
        for base in ["https://host.example/backend/", "https://host.example/backend"] {
            let url = service_at(base).endpoint(&["api", "blogs"]).unwrap();
            assert_eq!(url.as_str(), "https://host.example/backend/api/blogs");
        }

        let url = service_at("https://host.example").endpoint(&["api", "blogs"]).unwrap();
        assert_eq!(url.as_str(), "https://host.example/api/blogs");
    }

    #[test]
    fn ids_are_encoded_as_a_single_segment() {
        let url = service_at("https://host.example/")
            .endpoint(&["api", "blogs", "a?b/c#d", "approve"])
            .unwrap();

        assert_eq!(url.path(), "/api/blogs/a%3Fb%2Fc%23d/approve");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[tokio::test]
    async fn lists_posts_with_bearer_token() {
        let (service, calls) = stub().await;

        let posts = service.list_posts(Some(&token())).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].status, PostStatus::Published);
        assert_eq!(posts[1].likes, 1);
        assert_eq!(recorded(&calls), vec!["list [Bearer tok]".to_string()]);
    }

    #[tokio::test]
    async fn anonymous_requests_carry_no_token() {
        let (service, calls) = stub().await;

        service.get_post(None, "a").await.unwrap();

        assert_eq!(recorded(&calls), vec!["get a [-]".to_string()]);
    }

    #[tokio::test]
    async fn unit_actions_ignore_response_bodies() {
        let (service, calls) = stub().await;

        service.approve_post(&token(), "a").await.unwrap();
        service.delete_post(&token(), "b").await.unwrap();

        assert_eq!(
            recorded(&calls),
            vec![
                "approve a [Bearer tok]".to_string(),
                "delete b [Bearer tok]".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn surfaces_the_service_error_message() {
        let (service, _) = stub().await;

        let error = service.get_post(None, "missing").await.unwrap_err();
        assert_eq!(error.message, "blog service returned 404 Not Found: Blog not found");

        let error = service.reject_post(&token(), "a").await.unwrap_err();
        assert_eq!(error.message, "blog service returned 500 Internal Server Error: boom");
    }
}
