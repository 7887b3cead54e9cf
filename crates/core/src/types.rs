/// Internal database identifier (BIGSERIAL).
pub type DbId = i64;
