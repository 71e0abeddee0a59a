use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use content_dao::ContentStore;
use content_errors::ContentError;
use content_models::{
    CommentableType, NewComment, NewDocument, NewPost, User, WipeReport,
};
use tracing::{info, instrument, warn};

use crate::{
    IdGenerator, OverwriteGuard, Progress, Seeder,
    backdate::{
        COMMENT_AGE_HOURS, DOCUMENT_MAX_AGE_DAYS, POST_MAX_AGE_DAYS, days_ago,
        hours_ago,
    },
    catalog::Catalog,
    progress::truncate_title,
};

const TITLE_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub posts: usize,
    pub comments: usize,
    pub skipped_comments: usize,
    pub documents: usize,
    pub owner: String,
    pub wiped: Option<WipeReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(SeedSummary),
    /// Nobody has registered yet, so there is no one to own the content.
    NoUsers,
    /// Posts already existed and the operator chose to keep them.
    Declined { existing_posts: i64 },
}

impl SeedOutcome {
    pub fn wrote_rows(&self) -> bool { matches!(self, Self::Seeded(_)) }
}

/// Writes the demo catalog as the earliest registered user.
pub struct ContentSeeder {
    catalog: Catalog,
    progress: Progress,
}

impl ContentSeeder {
    pub fn new(progress: Progress) -> Self {
        Self {
            catalog: Catalog::demo(),
            progress,
        }
    }

    #[cfg(test)]
    fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Returns `None` when the operator declined the wipe.
    async fn clear_existing(
        &self, store: &mut dyn ContentStore,
        guard: &mut dyn OverwriteGuard, existing_posts: i64,
    ) -> Result<Option<WipeReport>, ContentError> {
        self.progress
            .line(format!("⚠️  Found {existing_posts} existing posts"));

        if !guard.confirm_overwrite(existing_posts)? {
            info!(existing_posts, "overwrite declined");
            self.progress.line("Keeping existing data");
            return Ok(None);
        }

        let report = store.wipe_posts().await?;
        info!(
            reactions = report.reactions,
            comments = report.comments,
            posts = report.posts,
            "cleared existing post content"
        );
        self.progress.line(format!(
            "✅ Cleared existing posts ({} posts, {} comments, {} reactions)",
            report.posts, report.comments, report.reactions
        ));
        Ok(Some(report))
    }

    #[instrument(skip_all, fields(count = self.catalog.posts.len()))]
    async fn insert_posts(
        &self, store: &mut dyn ContentStore, owner: &User,
        ids: &mut IdGenerator,
    ) -> Result<Vec<String>, ContentError> {
        self.progress.line("📰 Creating news posts...");
        let mut post_ids = Vec::with_capacity(self.catalog.posts.len());

        for template in self.catalog.posts {
            let now = Utc::now();
            let created_at = {
                let mut rng = rand::rng();
                days_ago(&mut rng, now, POST_MAX_AGE_DAYS)
            };
            let post = NewPost {
                id: ids.next_id(),
                post_type: template.post_type,
                title: template.title.to_string(),
                content: template.content.to_string(),
                tags: template.tags.iter().map(|t| t.to_string()).collect(),
                is_pinned: template.is_pinned,
                external_link: template.external_link.map(str::to_string),
                created_by: owner.id.clone(),
                created_at,
                updated_at: now,
            };

            store.insert_post(&post).await?;
            self.progress
                .item(truncate_title(template.title, TITLE_PREVIEW_CHARS));
            post_ids.push(post.id);
        }

        self.progress
            .line(format!("✅ Created {} posts", post_ids.len()));
        Ok(post_ids)
    }

    /// Returns (inserted, skipped).
    #[instrument(skip_all, fields(count = self.catalog.comments.len()))]
    async fn insert_comments(
        &self, store: &mut dyn ContentStore, owner: &User,
        post_ids: &[String], ids: &mut IdGenerator,
    ) -> Result<(usize, usize), ContentError> {
        self.progress.line("💬 Adding comments...");
        let mut inserted = 0;
        let mut skipped = 0;

        for template in self.catalog.comments {
            let Some(post_id) = post_ids.get(template.post_index)
            else {
                warn!(
                    post_index = template.post_index,
                    posts = post_ids.len(),
                    "comment points past the inserted posts, skipping"
                );
                skipped += 1;
                continue;
            };

            let created_at = {
                let mut rng = rand::rng();
                hours_ago(&mut rng, Utc::now(), COMMENT_AGE_HOURS)
            };
            let comment = NewComment {
                id: ids.next_id(),
                commentable_id: post_id.clone(),
                commentable_type: CommentableType::Post,
                content: template.content.to_string(),
                user_id: owner.id.clone(),
                created_at,
            };

            store.insert_comment(&comment).await?;
            inserted += 1;
        }

        self.progress.line(format!("✅ Added {inserted} comments"));
        Ok((inserted, skipped))
    }

    #[instrument(skip_all, fields(count = self.catalog.documents.len()))]
    async fn insert_documents(
        &self, store: &mut dyn ContentStore, owner: &User,
        ids: &mut IdGenerator,
    ) -> Result<usize, ContentError> {
        self.progress.line("📚 Creating knowledge base documents...");

        for template in self.catalog.documents {
            let now = Utc::now();
            let created_at = {
                let mut rng = rand::rng();
                days_ago(&mut rng, now, DOCUMENT_MAX_AGE_DAYS)
            };
            let document = NewDocument {
                id: ids.next_id(),
                title: template.title.to_string(),
                category: template.category,
                description: template.description.to_string(),
                content: template.content.to_string(),
                tags: template.tags.iter().map(|t| t.to_string()).collect(),
                created_by: owner.id.clone(),
                created_at,
                updated_at: now,
            };

            store.insert_document(&document).await?;
            self.progress.item(template.title);
        }

        let count = self.catalog.documents.len();
        self.progress.line(format!("✅ Created {count} documents"));
        Ok(count)
    }
}

#[async_trait]
impl Seeder for ContentSeeder {
    #[instrument(skip_all, fields(seeder = self.name()))]
    async fn seed(
        &self, store: &mut dyn ContentStore,
        guard: &mut dyn OverwriteGuard,
    ) -> Result<SeedOutcome, ContentError> {
        let started = Instant::now();

        let Some(owner) = store.earliest_user().await?
        else {
            warn!("no users registered, nothing to seed");
            self.progress.line("❌ No users found! Please sign up first.");
            return Ok(SeedOutcome::NoUsers);
        };
        self.progress.line(format!(
            "📝 Creating content as: {}",
            owner.display_name()
        ));

        let existing_posts = store.count_posts().await?;
        let wiped = if existing_posts > 0 {
            match self.clear_existing(store, guard, existing_posts).await? {
                Some(report) => Some(report),
                None => return Ok(SeedOutcome::Declined { existing_posts }),
            }
        }
        else {
            None
        };

        let mut ids = IdGenerator::new();
        let post_ids = self.insert_posts(store, &owner, &mut ids).await?;
        let (comments, skipped_comments) = self
            .insert_comments(store, &owner, &post_ids, &mut ids)
            .await?;
        let documents = self.insert_documents(store, &owner, &mut ids).await?;

        info!(
            posts = post_ids.len(),
            comments,
            skipped_comments,
            documents,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "demo content written"
        );

        Ok(SeedOutcome::Seeded(SeedSummary {
            posts: post_ids.len(),
            comments,
            skipped_comments,
            documents,
            owner: owner.display_name().to_string(),
            wiped,
        }))
    }

    fn name(&self) -> &'static str { "ContentSeeder" }
}
