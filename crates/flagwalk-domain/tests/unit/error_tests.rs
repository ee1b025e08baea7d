//! Unit tests for domain error types

use flagwalk_domain::{Error, SchemaError};

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("bad url");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "bad url"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_missing_parameter_displays_message_only() {
    let error = Error::missing_parameter("specify a service URL");
    assert_eq!(error.to_string(), "specify a service URL");
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to read config", io);

    assert!(error.to_string().contains("Failed to read config"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_client_error_with_source() {
    let io = std::io::Error::other("tls backend unavailable");
    let error = Error::client_with_source("Failed to build client", io);
    match &error {
        Error::Client { message, source } => {
            assert_eq!(message, "Failed to build client");
            assert!(source.is_some());
        }
        _ => panic!("Expected Client error"),
    }
    assert_eq!(error.to_string(), "Client error: Failed to build client");
}

#[test]
fn test_io_error_conversion() {
    let error: Error = std::io::Error::other("disk").into();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_schema_error_accessors() {
    let defect = SchemaError::Embedded {
        field: "client",
        owner: "Ls",
    };
    assert_eq!(defect.field(), "client");
    assert_eq!(defect.owner(), "Ls");
}
