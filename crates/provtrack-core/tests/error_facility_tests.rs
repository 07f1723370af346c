use provtrack_core::errors::{ExError, ExErrorKind, ProvenanceError};
use provtrack_core::provtrack_core_types::RequestId;

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = ProvenanceError::RecordNotFound {
        project: "demo".to_string(),
        label: "20260101-120000".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.project(), Some("demo"));
    assert_eq!(ex_err.record_label(), Some("20260101-120000"));
}

#[test]
fn test_duplicate_distinct_from_not_found() {
    let err = ProvenanceError::DuplicateRecord {
        project: "demo".to_string(),
        label: "run-1".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::AlreadyExists);
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_contract_violations_are_invalid_input() {
    let threshold: ExError = ProvenanceError::InvalidThreshold { value: 2.0 }.into();
    assert_eq!(threshold.kind(), ExErrorKind::InvalidInput);
    assert!(threshold.message().contains("[0, 1]"));

    let params: ExError = ProvenanceError::InvalidParameters {
        reason: "expected a mapping".to_string(),
    }
    .into();
    assert_eq!(params.code(), "ERR_INVALID_INPUT");
}

#[test]
fn test_config_errors_map_to_config_and_io() {
    let parse: ExError = ProvenanceError::InvalidConfig {
        reason: "bad toml".to_string(),
    }
    .into();
    assert_eq!(parse.kind(), ExErrorKind::InvalidConfig);

    let io: ExError = ProvenanceError::ConfigIo {
        path: "/etc/provtrack.toml".to_string(),
        message: "permission denied".to_string(),
    }
    .into();
    assert_eq!(io.kind(), ExErrorKind::Io);
    assert!(io.message().contains("/etc/provtrack.toml"));
}

#[test]
fn test_request_id_is_carried_and_displayed() {
    let request_id = RequestId::from_string("req-42".to_string());
    let ex_err = ExError::new(ExErrorKind::Internal)
        .with_op("compare_records")
        .with_request_id(request_id.clone())
        .with_message("boom");

    assert_eq!(ex_err.request_id(), Some(&request_id));
    assert!(ex_err.to_string().contains("req-42"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
