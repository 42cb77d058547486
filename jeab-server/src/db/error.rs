//! Storage error classification

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Uniqueness, foreign-key, not-null or check violation raised by SQLite
    #[error("constraint violation: {0}")]
    Constraint(sqlx::Error),

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl DbError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let constraint = match &err {
            sqlx::Error::Database(db) => {
                matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) || db.message().contains("constraint failed")
            }
            _ => false,
        };

        if constraint {
            Self::Constraint(err)
        } else {
            Self::Sqlx(err)
        }
    }
}
