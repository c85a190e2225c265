use serde::{Deserialize, Serialize};

use crate::{Post, PostStatus, Result, err};

/// Which list a dashboard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Pending,
    Published,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Pending, Tab::Published];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Published => "published",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Published => "Published",
        }
    }
}

/// Posts split by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostBuckets {
    pub pending: Vec<Post>,
    pub published: Vec<Post>,
    pub rejected: Vec<Post>,
}

impl PostBuckets {
    /// Split `posts` in one pass, keeping the incoming order within each bucket.
    pub fn partition<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Self {
        let mut buckets = Self::default();
        for post in posts {
            let bucket = match post.status {
                PostStatus::Pending => &mut buckets.pending,
                PostStatus::Published => &mut buckets.published,
                PostStatus::Rejected => &mut buckets.rejected,
            };
            bucket.push(post.clone());
        }
        buckets
    }

    pub fn for_tab(&self, tab: Tab) -> &[Post] {
        match tab {
            Tab::Pending => &self.pending,
            Tab::Published => &self.published,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn published_count(&self) -> usize {
        self.published.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Likes across published posts.
    pub fn total_likes(&self) -> u64 {
        self.published.iter().map(|p| u64::from(p.likes)).sum()
    }

    /// Comments across published posts.
    pub fn total_comments(&self) -> usize {
        self.published.iter().map(|p| p.comments.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationAction {
    Approve,
    Reject,
    Delete,
}

impl ModerationAction {
    /// The status a post ends up in, or `None` once it is deleted.
    ///
    /// Approve and reject only apply to pending posts.
    pub fn apply(self, current: PostStatus) -> Result<Option<PostStatus>> {
        match (self, current) {
            (Self::Approve, PostStatus::Pending) => Ok(Some(PostStatus::Published)),
            (Self::Reject, PostStatus::Pending) => Ok(Some(PostStatus::Rejected)),
            (Self::Delete, _) => Ok(None),
            (action, status) => Err(err!(
                "cannot {} a post that is already {status}",
                action.verb()
            )),
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Delete => "delete",
        }
    }

    /// The question to ask before running the action, if any.
    pub fn confirm_prompt(self) -> Option<&'static str> {
        match self {
            Self::Approve => None,
            Self::Reject => Some("Are you sure you want to reject this blog?"),
            Self::Delete => {
                Some("Are you sure you want to delete this blog? This action cannot be undone.")
            }
        }
    }
}
