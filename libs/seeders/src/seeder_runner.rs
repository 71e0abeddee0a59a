use std::time::Instant;

use content_dao::ContentDao;
use content_errors::ContentError;
use sql_connection::{SqlConnect, SqlTransaction, TransactionOps};
use tracing::{debug, info, instrument, warn};

use crate::{OverwriteGuard, Progress, SeedOutcome, SeedSummary, Seeder};

/// Runs a seeder inside exactly one database transaction.
pub struct SeederRunner {
    db: SqlConnect,
    progress: Progress,
}

impl SeederRunner {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            db,
            progress: Progress::default(),
        }
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    #[instrument(skip_all, fields(seeder = seeder.name()))]
    pub async fn run(
        &self, seeder: &dyn Seeder, guard: &mut dyn OverwriteGuard,
    ) -> Result<SeedOutcome, ContentError> {
        let seeder_start = Instant::now();
        self.progress
            .banner("🌱 Seeding Demo Data - Diesel Industry Hub");
        let mut client = self.db.get_client().await?;
        let (available, size) = self.db.get_pool_status();
        debug!(available, size, "checked out connection");

        let tx = SqlTransaction(client.transaction().await?);
        let result = {
            let mut store = ContentDao::new(&tx);
            seeder.seed(&mut store, guard).await
        };
        let outcome = settle(tx, result).await?;

        info!(
            "Seeder '{}' finished in {:.2}s",
            seeder.name(),
            seeder_start.elapsed().as_secs_f64()
        );
        if let SeedOutcome::Seeded(summary) = &outcome {
            report_summary(&self.progress, summary);
        }
        Ok(outcome)
    }
}

/// Commits only when the seeder wrote rows; every other path rolls back.
pub async fn settle<T>(
    tx: T, result: Result<SeedOutcome, ContentError>,
) -> Result<SeedOutcome, ContentError>
where
    T: TransactionOps,
    ContentError: From<T::Error>,
{
    match result {
        Ok(outcome) if outcome.wrote_rows() => {
            tx.submit().await?;
            info!("transaction committed");
            Ok(outcome)
        }
        Ok(outcome) => {
            tx.rollback().await?;
            debug!(?outcome, "nothing to commit, transaction rolled back");
            Ok(outcome)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "rollback after failure also failed");
            }
            Err(e)
        }
    }
}

pub fn report_summary(progress: &Progress, summary: &SeedSummary) {
    progress.banner("🎉 Demo Data Seeded Successfully!");
    progress.line("📊 Summary:");
    progress.line(format!("   • {} news posts", summary.posts));
    progress.line(format!("   • {} comments", summary.comments));
    if summary.skipped_comments > 0 {
        progress.line(format!(
            "   • {} comments skipped (no matching post)",
            summary.skipped_comments
        ));
    }
    progress
        .line(format!("   • {} knowledge base documents", summary.documents));
    progress.line(format!("   • Content created as: {}", summary.owner));
    progress.line("🚀 Refresh your app to see the new content!");
}
