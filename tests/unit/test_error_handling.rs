use sensei::SenseiError;

#[test]
fn invalid_input_names_the_offending_field() {
    let error = SenseiError::InvalidInput("code snippet cannot be empty".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid input: code snippet cannot be empty"
    );
}

#[test]
fn timeout_error_reports_the_limit() {
    let error = SenseiError::AnalysisTimeout { timeout: 60 };

    assert!(error.to_string().contains("60 seconds"));
}

#[test]
fn io_errors_convert_via_from() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error: SenseiError = io_error.into();

    assert!(matches!(error, SenseiError::IoError(_)));
    assert!(error.to_string().contains("missing file"));
}

#[test]
fn serde_errors_convert_via_from() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: SenseiError = json_error.into();

    assert!(matches!(error, SenseiError::SerializationError(_)));
}

#[test]
fn follow_up_failure_is_its_own_variant() {
    let error = SenseiError::AnalysisUnavailable("connection refused".to_string());

    assert!(error.to_string().contains("Follow-up answer unavailable"));
    assert!(error.to_string().contains("connection refused"));
}
