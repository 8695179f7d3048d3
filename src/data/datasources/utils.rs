use serde::de::DeserializeOwned;
use tracing::warn;

/// Parses each JSON record independently. A malformed record is logged and
/// dropped; the remaining records are still returned.
pub(crate) fn parse_records<T: DeserializeOwned>(
    vendor: &'static str,
    records: &[String],
) -> Vec<T> {
    records
        .iter()
        .filter_map(|record| match serde_json::from_str(record) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!(vendor, error = %e, "dropping malformed record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Record {
        id: String,
    }

    #[test]
    fn malformed_records_are_dropped_individually() {
        let records = vec![
            r#"{"id":"a"}"#.to_string(),
            "{not json".to_string(),
            r#"{"other":"b"}"#.to_string(),
            r#"{"id":"c"}"#.to_string(),
        ];

        let parsed: Vec<Record> = parse_records("test", &records);

        assert_eq!(
            parsed.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }
}
