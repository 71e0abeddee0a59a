use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use content_dao::ContentStore;
use content_errors::ContentError;
use content_models::{NewComment, NewDocument, NewPost, User, WipeReport};

use crate::{FixedAnswer, OverwriteGuard, generate_id};

/// In-memory stand-in for the content tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: Vec<(User, DateTime<Utc>)>,
    pub posts: Vec<NewPost>,
    pub comments: Vec<NewComment>,
    /// Comments attached to something other than a post.
    pub foreign_comments: usize,
    /// `commentableType` of each reaction.
    pub reactions: Vec<&'static str>,
    pub documents: Vec<NewDocument>,
    pub calls: Vec<&'static str>,
    pub fail_on: Option<&'static str>,
}

impl MemoryStore {
    pub fn with_user(name: Option<&str>) -> Self {
        let mut store = Self::default();
        store.add_user("u-first", name, 10);
        store
    }

    pub fn add_user(&mut self, id: &str, name: Option<&str>, days_ago: i64) {
        self.users.push((
            User {
                id: id.to_string(),
                name: name.map(str::to_string),
            },
            Utc::now() - Duration::days(days_ago),
        ));
    }

    /// Rows a previous run would have left behind.
    pub fn add_existing_content(&mut self, posts: usize) {
        let mut rng = rand::rng();
        for i in 0..posts {
            self.posts.push(NewPost {
                id: generate_id(&mut rng),
                post_type: content_models::PostType::News,
                title: format!("Old post {i}"),
                content: "old".into(),
                tags: vec![],
                is_pinned: false,
                external_link: None,
                created_by: "u-first".into(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
        }
        let first_post = self.posts[0].id.clone();
        self.comments.push(NewComment {
            id: generate_id(&mut rng),
            commentable_id: first_post,
            commentable_type: content_models::CommentableType::Post,
            content: "old comment".into(),
            user_id: "u-first".into(),
            created_at: Utc::now(),
        });
        self.foreign_comments = 2;
        self.reactions = vec!["post", "post", "document"];
    }

    pub fn snapshot(&self) -> (usize, usize, usize, usize, usize) {
        (
            self.posts.len(),
            self.comments.len(),
            self.foreign_comments,
            self.reactions.len(),
            self.documents.len(),
        )
    }

    fn record(&mut self, call: &'static str) -> Result<(), ContentError> {
        self.calls.push(call);
        if self.fail_on == Some(call) {
            return Err(ContentError::Prompt(format!("injected failure: {call}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn earliest_user(&mut self) -> Result<Option<User>, ContentError> {
        self.record("earliest_user")?;
        Ok(self
            .users
            .iter()
            .min_by_key(|(_, created_at)| *created_at)
            .map(|(user, _)| user.clone()))
    }

    async fn count_posts(&mut self) -> Result<i64, ContentError> {
        self.record("count_posts")?;
        Ok(self.posts.len() as i64)
    }

    async fn wipe_posts(&mut self) -> Result<WipeReport, ContentError> {
        self.record("wipe_posts")?;
        let reactions_before = self.reactions.len();
        self.reactions.retain(|kind| *kind != "post");
        let report = WipeReport {
            reactions: (reactions_before - self.reactions.len()) as u64,
            comments: self.comments.len() as u64,
            posts: self.posts.len() as u64,
        };
        self.comments.clear();
        self.posts.clear();
        Ok(report)
    }

    async fn insert_post(
        &mut self, post: &NewPost,
    ) -> Result<(), ContentError> {
        self.record("insert_post")?;
        self.posts.push(post.clone());
        Ok(())
    }

    async fn insert_comment(
        &mut self, comment: &NewComment,
    ) -> Result<(), ContentError> {
        self.record("insert_comment")?;
        self.comments.push(comment.clone());
        Ok(())
    }

    async fn insert_document(
        &mut self, document: &NewDocument,
    ) -> Result<(), ContentError> {
        self.record("insert_document")?;
        self.documents.push(document.clone());
        Ok(())
    }
}

/// Fixed answer that also remembers how often it was asked.
#[derive(Debug)]
pub struct RecordingGuard {
    pub answer: FixedAnswer,
    pub asked_with: Vec<i64>,
}

impl RecordingGuard {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: FixedAnswer(answer),
            asked_with: Vec::new(),
        }
    }
}

impl OverwriteGuard for RecordingGuard {
    fn confirm_overwrite(
        &mut self, existing_posts: i64,
    ) -> Result<bool, ContentError> {
        self.asked_with.push(existing_posts);
        self.answer.confirm_overwrite(existing_posts)
    }
}
