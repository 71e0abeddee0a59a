use content_errors::ContentError;

/// What most likely went wrong, in terms an operator can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    ConstraintViolation,
    MissingTable,
    Prompt,
    Other,
}

impl FailureKind {
    pub fn hint(self) -> &'static str {
        match self {
            Self::Connection => {
                "Check DATABASE_URL and make sure the database is running."
            }
            Self::ConstraintViolation => {
                "The database rejected a row. Check that the schema matches \
                 the application and that no other seeder is running."
            }
            Self::MissingTable => {
                "A content table is missing. Run the application migrations \
                 first."
            }
            Self::Prompt => {
                "Could not read the answer from the terminal. Use --overwrite \
                 or --mode quiet when running without one."
            }
            Self::Other => "Nothing was written; the transaction was rolled back.",
        }
    }
}

pub fn classify(error: &ContentError) -> FailureKind {
    match error {
        ContentError::DatabasePool(_) => FailureKind::Connection,
        ContentError::Prompt(_) => FailureKind::Prompt,
        ContentError::Database(db) => {
            match error.sql_state() {
                Some(code) if code.starts_with("23") => {
                    FailureKind::ConstraintViolation
                }
                Some("42P01") => FailureKind::MissingTable,
                Some(code) if code.starts_with("08") => FailureKind::Connection,
                None if db.is_closed() => FailureKind::Connection,
                _ => FailureKind::Other,
            }
        }
    }
}

/// The failure message with the operator hint appended.
pub fn describe_seed_error(error: &ContentError, seeder_name: &str) -> String {
    let kind = classify(error);
    format!("Seeder '{seeder_name}' failed: {error}. {}", kind.hint())
}
