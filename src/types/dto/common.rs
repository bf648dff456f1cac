use chrono::DateTime;

/// Render an epoch-seconds column as an ISO 8601 timestamp for API responses.
pub fn to_rfc3339(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}
