/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a time-ordered identifier with a readable prefix, e.g.
/// `alert-0192f3...`.
///
/// UUIDv7 embeds the creation time, so ids sort in creation order and two
/// ids minted in the same millisecond still differ.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::now_v7())
}
