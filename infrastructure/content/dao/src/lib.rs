use async_trait::async_trait;
use content_errors::ContentError;
use content_models::{
    CommentableType, NewComment, NewDocument, NewPost, User, WipeReport,
};
use sql_connection::SqlTransaction;
use tracing::{debug, instrument};

/// Everything the demo-content seeder needs from the database.
///
/// Implementations are expected to run every call inside the same unit of
/// work; committing or discarding it is the caller's business.
#[async_trait]
pub trait ContentStore: Send {
    /// The account registered first, if any.
    async fn earliest_user(&mut self) -> Result<Option<User>, ContentError>;

    async fn count_posts(&mut self) -> Result<i64, ContentError>;

    /// Removes post reactions, post comments and then posts.
    async fn wipe_posts(&mut self) -> Result<WipeReport, ContentError>;

    async fn insert_post(&mut self, post: &NewPost)
    -> Result<(), ContentError>;

    async fn insert_comment(
        &mut self, comment: &NewComment,
    ) -> Result<(), ContentError>;

    async fn insert_document(
        &mut self, document: &NewDocument,
    ) -> Result<(), ContentError>;
}

const EARLIEST_USER_SQL: &str =
    "SELECT id::text, name FROM users ORDER BY \"createdAt\" ASC LIMIT 1";

const COUNT_POSTS_SQL: &str = "SELECT COUNT(*) FROM posts";

const DELETE_REACTIONS_SQL: &str =
    "DELETE FROM reactions WHERE \"commentableType\" = $1";

const DELETE_COMMENTS_SQL: &str =
    "DELETE FROM comments WHERE \"commentableType\" = $1";

const DELETE_POSTS_SQL: &str = "DELETE FROM posts";

const INSERT_POST_SQL: &str = "INSERT INTO posts (
         id, type, title, content, tags, \"isPinned\",
         \"externalLink\", \"createdBy\", \"createdAt\", \"updatedAt\"
     ) VALUES ($1, $2, $3, $4, $5::jsonb, $6, $7, $8, $9::timestamptz, \
                               $10::timestamptz)";

const INSERT_COMMENT_SQL: &str = "INSERT INTO comments (
         id, \"commentableId\", \"commentableType\", content,
         \"userId\", \"createdAt\"
     ) VALUES ($1, $2, $3, $4, $5, $6::timestamptz)";

const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (
         id, title, category, description, content, tags,
         \"createdBy\", \"createdAt\", \"updatedAt\"
     ) VALUES ($1, $2, $3, $4, $5, $6::jsonb, $7, $8::timestamptz, \
                                   $9::timestamptz)";

/// [`ContentStore`] over one open Postgres transaction.
pub struct ContentDao<'t, 'c> {
    tx: &'t SqlTransaction<'c>,
}

impl<'t, 'c> ContentDao<'t, 'c> {
    pub fn new(tx: &'t SqlTransaction<'c>) -> Self { Self { tx } }

    async fn execute(
        &self, sql: &str, params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<u64, ContentError> {
        let stmt = self.tx.prepare_cached(sql).await?;
        Ok(self.tx.execute(&stmt, params).await?)
    }
}

fn tags_json(tags: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        tags.iter().cloned().map(serde_json::Value::String).collect(),
    )
}

#[async_trait]
impl ContentStore for ContentDao<'_, '_> {
    #[instrument(skip(self))]
    async fn earliest_user(&mut self) -> Result<Option<User>, ContentError> {
        let stmt = self.tx.prepare_cached(EARLIEST_USER_SQL).await?;
        let rows = self.tx.query(&stmt, &[]).await?;

        Ok(rows.first().map(|row| {
            User {
                id: row.get(0),
                name: row.get(1),
            }
        }))
    }

    #[instrument(skip(self))]
    async fn count_posts(&mut self) -> Result<i64, ContentError> {
        let stmt = self.tx.prepare_cached(COUNT_POSTS_SQL).await?;
        let row = self.tx.query_one(&stmt, &[]).await?;
        Ok(row.get(0))
    }

    #[instrument(skip(self))]
    async fn wipe_posts(&mut self) -> Result<WipeReport, ContentError> {
        let kind = CommentableType::Post.as_str();

        let reactions = self.execute(DELETE_REACTIONS_SQL, &[&kind]).await?;
        let comments = self.execute(DELETE_COMMENTS_SQL, &[&kind]).await?;
        let posts = self.execute(DELETE_POSTS_SQL, &[]).await?;

        debug!(reactions, comments, posts, "wiped post content");
        Ok(WipeReport {
            reactions,
            comments,
            posts,
        })
    }

    #[instrument(skip(self, post), fields(post.id = %post.id))]
    async fn insert_post(
        &mut self, post: &NewPost,
    ) -> Result<(), ContentError> {
        self.execute(INSERT_POST_SQL, &[
            &post.id,
            &post.post_type.as_str(),
            &post.title,
            &post.content,
            &tags_json(&post.tags),
            &post.is_pinned,
            &post.external_link,
            &post.created_by,
            &post.created_at,
            &post.updated_at,
        ])
        .await?;
        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment.id = %comment.id))]
    async fn insert_comment(
        &mut self, comment: &NewComment,
    ) -> Result<(), ContentError> {
        self.execute(INSERT_COMMENT_SQL, &[
            &comment.id,
            &comment.commentable_id,
            &comment.commentable_type.as_str(),
            &comment.content,
            &comment.user_id,
            &comment.created_at,
        ])
        .await?;
        Ok(())
    }

    #[instrument(skip(self, document), fields(document.id = %document.id))]
    async fn insert_document(
        &mut self, document: &NewDocument,
    ) -> Result<(), ContentError> {
        self.execute(INSERT_DOCUMENT_SQL, &[
            &document.id,
            &document.title,
            &document.category.as_str(),
            &document.description,
            &document.content,
            &tags_json(&document.tags),
            &document.created_by,
            &document.created_at,
            &document.updated_at,
        ])
        .await?;
        Ok(())
    }
}
