use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const UNIQUE_ARTICLE_SLUG: &str = "articles.slug";
const UNIQUE_CATEGORY_SLUG: &str = "categories.slug";
const UNIQUE_TAG_SLUG: &str = "tags.slug";

// Extended SQLite result codes.
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            let code = db_err.code();
            let code = code.as_deref();

            let unique = matches!(db_err.kind(), ErrorKind::UniqueViolation)
                || matches!(code, Some(SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY));
            if unique {
                return if message.contains(UNIQUE_ARTICLE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else if message.contains(UNIQUE_CATEGORY_SLUG) {
                    DomainError::Conflict("category slug already exists".into())
                } else if message.contains(UNIQUE_TAG_SLUG) {
                    DomainError::Conflict("tag slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation)
                || code == Some(SQLITE_CONSTRAINT_FOREIGNKEY)
            {
                return DomainError::NotFound("referenced record not found".into());
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
