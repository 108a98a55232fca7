/*!
 * Tests for error types and conversions
 */

use std::io;
use std::path::PathBuf;
use mdnarrate::errors::NarrationError;

#[test]
fn test_narrationError_inputAccess_shouldDisplayPathAndCause() {
    let error = NarrationError::InputAccess {
        path: PathBuf::from("lesson.md"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    let display = format!("{}", error);

    assert!(display.contains("Failed to read input file"));
    assert!(display.contains("lesson.md"));
    assert!(display.contains("no such file"));
    assert!(error.is_input_error());
    assert!(!error.is_output_error());
}

#[test]
fn test_narrationError_invalidEncoding_shouldCountAsInputError() {
    let error = NarrationError::InvalidEncoding { path: PathBuf::from("latin1.md") };

    assert!(format!("{}", error).contains("not valid UTF-8"));
    assert!(error.is_input_error());
}

#[test]
fn test_narrationError_outputAccess_shouldExposeSource() {
    use std::error::Error;

    let error = NarrationError::OutputAccess {
        path: PathBuf::from("/readonly/out.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    assert!(error.is_output_error());
    assert!(error.source().is_some());
}

#[test]
fn test_narrationError_fromRegexError_shouldWrapAsPattern() {
    let regex_error = regex::Regex::new("(").unwrap_err();
    let error: NarrationError = regex_error.into();

    assert!(matches!(error, NarrationError::Pattern(_)));
    assert!(format!("{}", error).starts_with("Invalid pattern"));
}
