/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Application name carried on every mutation alert.
pub const APPLICATION_NAME: &str = "bankadvice";
