use dioxus::prelude::*;
use types::{Post, User};

#[cfg(feature = "server")]
use types::{ModerationAction, err};

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<User>> {
    Ok(server::optional_session().await.map(|session| session.user))
}

/// Fetch-all: every post in the system, for the moderation queue.
#[post("/api/posts/all")]
pub async fn list_all_posts() -> ServerFnResult<Vec<Post>> {
    let session = server::require_admin_session().await?;
    Ok(server::blog_service()?
        .list_posts(Some(&session.access_token))
        .await?)
}

/// Fetch-by-user: posts written by `user_id`.
#[post("/api/posts/by-user")]
pub async fn list_user_posts(user_id: String) -> ServerFnResult<Vec<Post>> {
    let session = server::require_session().await?;
    if !server::can_list_posts_of(&session, &user_id) {
        return Err(err!("access denied: cannot list another user's posts").into());
    }

    Ok(server::blog_service()?
        .list_user_posts(&session.access_token, &user_id)
        .await?)
}

#[post("/api/posts/published")]
pub async fn list_published_posts() -> ServerFnResult<Vec<Post>> {
    let session = server::optional_session().await;
    let posts = server::blog_service()?
        .list_posts(session.as_ref().map(|s| &s.access_token))
        .await?;

    Ok(posts.into_iter().filter(Post::is_published).collect())
}

#[post("/api/posts/get")]
pub async fn get_post(post_id: String) -> ServerFnResult<Post> {
    let session = server::optional_session().await;
    let post = server::blog_service()?
        .get_post(session.as_ref().map(|s| &s.access_token), &post_id)
        .await?;

    if !server::can_view(session.as_ref(), &post) {
        return Err(err!("blog not found").into());
    }
    Ok(post)
}

#[post("/api/posts/create")]
pub async fn create_post(title: String, content: String) -> ServerFnResult<Post> {
    let session = server::require_session().await?;
    let (title, content) = (title.trim(), content.trim());
    if title.is_empty() || content.is_empty() {
        return Err(err!("a blog needs both a title and some content").into());
    }

    let post = server::blog_service()?
        .create_post(&session.access_token, title, content)
        .await?;
    tracing::info!(post_id = %post.id, author = %session.user.username, "created post");
    Ok(post)
}

#[post("/api/posts/approve")]
pub async fn approve_post(post_id: String) -> ServerFnResult<()> {
    let session = server::require_admin_session().await?;
    server::moderate(&session, &post_id, ModerationAction::Approve).await?;
    Ok(())
}

#[post("/api/posts/reject")]
pub async fn reject_post(post_id: String) -> ServerFnResult<()> {
    let session = server::require_admin_session().await?;
    server::moderate(&session, &post_id, ModerationAction::Reject).await?;
    Ok(())
}

/// Admins can delete anything, authors only their own pending posts.
#[post("/api/posts/delete")]
pub async fn delete_post(post_id: String) -> ServerFnResult<()> {
    let session = server::require_session().await?;
    server::moderate(&session, &post_id, ModerationAction::Delete).await?;
    Ok(())
}
