use super::*;

#[test]
fn validation_constructor_formats_message() {
    let err = ScribbleError::validation("bad palette");
    assert_eq!(err.to_string(), "validation error: bad palette");
}

#[test]
fn surface_constructor_formats_message() {
    let err = ScribbleError::surface("width exceeds u16");
    assert_eq!(err.to_string(), "surface error: width exceeds u16");
}

#[test]
fn anyhow_errors_pass_through() {
    let err: ScribbleError = anyhow::anyhow!("lower-level failure").into();
    assert_eq!(err.to_string(), "lower-level failure");
}
