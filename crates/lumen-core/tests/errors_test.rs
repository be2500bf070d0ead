use lumen_core::errors::*;

#[test]
fn storage_error_converts_to_lumen_error() {
    let storage_err = StorageError::Sqlite {
        message: "disk full".into(),
    };
    let err: LumenError = storage_err.into();
    assert!(matches!(err, LumenError::Storage(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn cloud_error_converts_to_lumen_error() {
    let err: LumenError = CloudError::NetworkError {
        reason: "connection refused".into(),
    }
    .into();
    assert!(err.is_network());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn http_status_counts_as_network_failure() {
    let err: LumenError = CloudError::HttpStatus { status: 503 }.into();
    assert!(err.is_network());
    assert!(err.to_string().contains("503"));
}

#[test]
fn unsuccessful_response_is_not_a_network_failure() {
    let err: LumenError = CloudError::Unsuccessful {
        endpoint: "trending".into(),
    }
    .into();
    assert!(!err.is_network());
    assert!(err.to_string().contains("trending"));
}

#[test]
fn invalid_filter_carries_value() {
    let err = SearchError::InvalidFilter {
        filter: "sortBy",
        value: "loudness".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("sortBy"));
    assert!(msg.contains("loudness"));
}

#[test]
fn serde_json_error_converts() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: LumenError = parse_err.into();
    assert!(matches!(err, LumenError::Serialization(_)));
}
