//! Scheduled content posts for the calendar view.

use serde::{Deserialize, Serialize};

/// Publishing platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    LinkedIn,
    Twitter,
    YouTube,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::YouTube => "YouTube",
        }
    }
}

/// Where a post sits in the publishing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Scheduled => "Scheduled",
            PostStatus::Published => "Published",
        }
    }
}

/// A scheduled content post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Soft reference to a client id - never validated, may dangle
    pub client_id: String,
    pub platform: Platform,
    pub post_type: String,
    pub hook: String,
    pub scheduled_date: String,
    pub status: PostStatus,
    /// Content pillar this post serves (free text, matches a client pillar by
    /// convention only)
    pub pillar: String,
}

/// Fields supplied to create a post - everything but the id
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub client_id: String,
    pub platform: Platform,
    pub post_type: String,
    pub hook: String,
    pub scheduled_date: String,
    pub status: PostStatus,
    pub pillar: String,
}

impl PostDraft {
    pub(crate) fn into_post(self, id: String) -> Post {
        Post {
            id,
            client_id: self.client_id,
            platform: self.platform,
            post_type: self.post_type,
            hook: self.hook,
            scheduled_date: self.scheduled_date,
            status: self.status,
            pillar: self.pillar,
        }
    }
}

/// Partial update for a post
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub client_id: Option<String>,
    pub platform: Option<Platform>,
    pub post_type: Option<String>,
    pub hook: Option<String>,
    pub scheduled_date: Option<String>,
    pub status: Option<PostStatus>,
    pub pillar: Option<String>,
}

impl PostPatch {
    /// Shallow-merge this patch over `post`
    pub fn apply(self, post: &mut Post) {
        if let Some(v) = self.client_id {
            post.client_id = v;
        }
        if let Some(v) = self.platform {
            post.platform = v;
        }
        if let Some(v) = self.post_type {
            post.post_type = v;
        }
        if let Some(v) = self.hook {
            post.hook = v;
        }
        if let Some(v) = self.scheduled_date {
            post.scheduled_date = v;
        }
        if let Some(v) = self.status {
            post.status = v;
        }
        if let Some(v) = self.pillar {
            post.pillar = v;
        }
    }
}
