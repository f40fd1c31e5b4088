/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque row identifier for option groups, items and combinations.
///
/// Rows only need to be unique within one form; a random v4 UUID is used so
/// ids from saved drafts never collide with new rows.
pub fn new_row_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// `true` when the name still has content after trimming.
#[inline]
pub fn is_filled(name: &str) -> bool {
    !name.trim().is_empty()
}
