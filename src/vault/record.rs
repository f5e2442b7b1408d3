//! The credential record and its persisted encoding.
//!
//! The whole ordered list is stored as one JSON array:
//!
//! ```text
//! [{"service":"GitHub","username":"octocat","encryptedPassword":"<base64>"}, ...]
//! ```
//!
//! Field names are part of the storage format and must not change.

use serde::{Deserialize, Serialize};

use crate::errors::{PwVaultError, Result};

/// One stored credential. Immutable once created; only whole-record
/// deletion is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Display label (e.g. "GitHub"). Duplicates are allowed.
    pub service: String,

    /// Account name shown next to the service.
    pub username: String,

    /// The encrypted secret as produced by `crypto::encrypt`.
    #[serde(rename = "encryptedPassword")]
    pub secret_ciphertext: String,
}

impl CredentialRecord {
    /// Case-insensitive substring match on the service name.
    ///
    /// An empty query matches everything.
    pub fn matches_service(&self, query: &str) -> bool {
        self.service
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Check the labels of a new entry. Service and username must contain
/// more than whitespace.
pub fn validate_labels(service: &str, username: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(PwVaultError::IncompleteEntry("service"));
    }
    if username.trim().is_empty() {
        return Err(PwVaultError::IncompleteEntry("username"));
    }
    Ok(())
}

/// Filter `records` by service, keeping each record's position in the
/// full list so callers can address it afterwards.
pub fn filter_by_service<'a>(
    records: &'a [CredentialRecord],
    query: &str,
) -> Vec<(usize, &'a CredentialRecord)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.matches_service(query))
        .collect()
}

/// Serialize the full record list for storage.
pub fn encode_records(records: &[CredentialRecord]) -> Result<String> {
    serde_json::to_string(records)
        .map_err(|e| PwVaultError::SerializationError(format!("records: {e}")))
}

/// Parse a stored record list. Blank input is an empty vault.
pub fn decode_records(raw: &str) -> Result<Vec<CredentialRecord>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
        .map_err(|e| PwVaultError::InvalidVaultFormat(format!("records JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(service: &str) -> CredentialRecord {
        CredentialRecord {
            service: service.to_string(),
            username: "user".to_string(),
            secret_ciphertext: "c2VjcmV0".to_string(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![record("Gmail"), record("GitHub")];
        let hits = filter_by_service(&records, "git");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);
        assert_eq!(hits[0].1.service, "GitHub");
    }

    #[test]
    fn empty_query_matches_everything() {
        let records = vec![record("Gmail"), record("GitHub")];
        assert_eq!(filter_by_service(&records, "").len(), 2);
    }

    #[test]
    fn search_ignores_username() {
        let mut r = record("Bank");
        r.username = "github-fan".to_string();
        assert!(filter_by_service(&[r], "github").is_empty());
    }

    #[test]
    fn uses_stored_field_names() {
        let json = encode_records(&[record("Gmail")]).unwrap();
        assert_eq!(
            json,
            r#"[{"service":"Gmail","username":"user","encryptedPassword":"c2VjcmV0"}]"#
        );
    }

    #[test]
    fn blank_input_decodes_to_empty_list() {
        assert!(decode_records("").unwrap().is_empty());
        assert!(decode_records("  \n").unwrap().is_empty());
    }

    #[test]
    fn labels_must_be_more_than_whitespace() {
        assert!(validate_labels("GitHub", "octocat").is_ok());
        assert!(matches!(
            validate_labels("  ", "octocat"),
            Err(PwVaultError::IncompleteEntry("service"))
        ));
        assert!(matches!(
            validate_labels("GitHub", "\t"),
            Err(PwVaultError::IncompleteEntry("username"))
        ));
    }

    #[test]
    fn malformed_input_is_rejected() {
        let result = decode_records("{not json");
        assert!(matches!(result, Err(PwVaultError::InvalidVaultFormat(_))));
    }
}
