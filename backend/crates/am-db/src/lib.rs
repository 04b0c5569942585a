pub mod error;
pub mod repositories;
pub mod services;


pub use error::{DbError, Result};
pub use repositories::entity_repository::EntityRepository;
pub use repositories::modification_log_repository::ModificationLogRepository;
pub use repositories::user_repository::UserRepository;
pub use services::entity_service::{EntityService, UpdateOutcome};
pub use services::history_service::HistoryService;

/// Migrations for the asset register schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
