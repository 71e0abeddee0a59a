pub mod backdate;
pub mod catalog;
pub mod content_seeder;
pub mod guard;
pub mod id;
pub mod progress;
pub mod seeder_runner;

#[cfg(test)]
mod memory_store;

use async_trait::async_trait;
use content_dao::ContentStore;
use content_errors::ContentError;

#[async_trait]
pub trait Seeder: Send + Sync {
    /// Runs against a store whose writes the caller commits or discards.
    async fn seed(
        &self, store: &mut dyn ContentStore, guard: &mut dyn OverwriteGuard,
    ) -> Result<SeedOutcome, ContentError>;

    fn name(&self) -> &'static str;
}

pub use catalog::Catalog;
pub use content_seeder::{ContentSeeder, SeedOutcome, SeedSummary};
pub use guard::{FixedAnswer, OverwriteGuard, is_affirmative};
pub use id::{IdGenerator, generate_id};
pub use progress::Progress;
pub use seeder_runner::SeederRunner;
