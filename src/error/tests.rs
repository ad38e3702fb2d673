//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_csv_error_conversion() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc\n".as_bytes());
        let csv_error = reader
            .records()
            .find_map(|record| record.err())
            .expect("ragged input should fail");
        let stats_error = StatsError::from(csv_error);

        match stats_error {
            StatsError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let stats_error = StatsError::from(parse_error);

        match stats_error {
            StatsError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_schema_mismatch_error() {
        let error = StatsError::SchemaMismatch {
            column: "School".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Schema mismatch"));
        assert!(error_string.contains("School"));
    }

    #[test]
    fn test_type_coercion_error_lists_column_and_value() {
        let error = StatsError::TypeCoercion {
            column: "W".to_string(),
            value: "twelve".to_string(),
            target: "integer".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("'twelve'"));
        assert!(error_string.contains("'W'"));
        assert!(error_string.contains("integer"));
    }

    #[test]
    fn test_invalid_quantile_error() {
        let error = StatsError::InvalidQuantile { quantile: 1.5 };
        assert_eq!(
            error.to_string(),
            "Invalid quantile 1.5: must be within [0, 1]"
        );
    }

    #[test]
    fn test_malformed_row_error() {
        let error = StatsError::MalformedRow {
            line: 4,
            expected: 10,
            found: 7,
        };
        assert_eq!(error.to_string(), "Row 4 has 7 fields, expected 10");
    }

    #[test]
    fn test_no_data_error() {
        let error = StatsError::NoData;
        assert_eq!(error.to_string(), "Source returned no data");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        let error_trait: &dyn std::error::Error = &stats_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = StatsError::NoData;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "NoData");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(StatsError::NoData)
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            StatsError::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }
}
