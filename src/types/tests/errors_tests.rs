use crate::types::errors::CommandError;

#[test]
fn test_command_error_display() {
    let err = CommandError::Preview("Server is already running".to_string());
    assert_eq!(err.to_string(), "Preview error: Server is already running");
}

#[test]
fn test_command_error_serialization() {
    let err = CommandError::Internal("bind failed".to_string());

    // CommandError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Internal error: bind failed\"");
}
