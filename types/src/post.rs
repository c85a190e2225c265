use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Published,
    Rejected,
}

impl PostStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, alias = "text")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub content: Option<String>,
    pub status: PostStatus,
    pub created_at: Timestamp,
    #[serde(default, deserialize_with = "like_count")]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn is_pending(&self) -> bool {
        self.status == PostStatus::Pending
    }
}

/// The blog service sends likes either as a count or as the list of users who
/// liked the post.
fn like_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Likes {
        Count(u32),
        Users(Vec<serde_json::Value>),
    }

    match Likes::deserialize(deserializer)? {
        Likes::Count(n) => Ok(n),
        Likes::Users(users) => u32::try_from(users.len()).map_err(serde::de::Error::custom),
    }
}
