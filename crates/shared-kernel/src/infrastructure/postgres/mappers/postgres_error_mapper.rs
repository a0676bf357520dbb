// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use sqlx::postgres::PgDatabaseError;

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
    fn map_store(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                entity: E::entity_name(),
                id: "unknown".into(),
            },
            sqlx::Error::Database(db_err) => {
                // Violation d'unicité (Code Postgres 23505)
                if db_err.code().map(|c| c == "23505").unwrap_or(false) {
                    let mut field = "unique_constraint";

                    if let Some(constraint_name) = db_err
                        .try_downcast_ref::<PgDatabaseError>()
                        .and_then(|pg| pg.constraint())
                    {
                        field = E::map_constraint_to_field(constraint_name);
                    }

                    return DomainError::AlreadyExists {
                        entity: E::entity_name(),
                        field,
                        value: "already taken".into(),
                    };
                }

                DomainError::Store(db_err.message().into())
            }
            _ => DomainError::Store(e.to_string()),
        })
    }

    fn map_store(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Store(format!("{}: {}", context, e)))
    }
}
