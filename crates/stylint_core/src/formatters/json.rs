//! JSON output formatter.

use crate::LinterError;
use crate::result::ResultRecord;

/// Serializes the records as a JSON array.
pub fn format_json(results: &[ResultRecord]) -> Result<String, LinterError> {
    serde_json::to_string(results)
        .map_err(|e| LinterError::Internal(format!("Failed to serialize results: {}", e)))
}
