use content_errors::ContentError;

/// Decides whether existing posts may be deleted before reseeding.
pub trait OverwriteGuard: Send {
    fn confirm_overwrite(
        &mut self, existing_posts: i64,
    ) -> Result<bool, ContentError>;
}

/// Only a lone `y` (any case, surrounding whitespace ignored) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Answers every prompt the same way without asking anyone.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl OverwriteGuard for FixedAnswer {
    fn confirm_overwrite(
        &mut self, _existing_posts: i64,
    ) -> Result<bool, ContentError> {
        Ok(self.0)
    }
}
