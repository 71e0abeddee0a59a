use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name used when the owning user never set one.
pub const FALLBACK_USER_NAME: &str = "Admin";

/// An already registered account. Only the columns the seeder reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_USER_NAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    News,
    Bulletin,
    DieselTech,
    Announcement,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Bulletin => "bulletin",
            Self::DieselTech => "diesel_tech",
            Self::Announcement => "announcement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    TrainingVideo,
    Faq,
    SafetyGuideline,
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrainingVideo => "training_video",
            Self::Faq => "faq",
            Self::SafetyGuideline => "safety_guideline",
        }
    }
}

/// Which kind of entity a comment or reaction hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentableType {
    Post,
}

impl CommentableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(PostType, DocumentCategory, CommentableType);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub id: String,
    pub post_type: PostType,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub external_link: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub id: String,
    pub commentable_id: String,
    pub commentable_type: CommentableType,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDocument {
    pub id: String,
    pub title: String,
    pub category: DocumentCategory,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rows removed by the pre-reseed wipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipeReport {
    pub reactions: u64,
    pub comments: u64,
    pub posts: u64,
}
