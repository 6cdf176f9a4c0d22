//! Unit tests for UI error types

#[cfg(test)]
mod tests {
    use crate::ui::error::UiError;

    #[test]
    fn test_io_error_converts() {
        let err: UiError = std::io::Error::other("terminal gone").into();
        assert!(matches!(err, UiError::Io(_)));
        assert_eq!(err.to_string(), "IO error: terminal gone");
    }

    #[test]
    fn test_prompt_and_cancel_messages() {
        assert_eq!(
            UiError::Prompt("not a tty".to_string()).to_string(),
            "Prompt failed: not a tty"
        );
        assert_eq!(UiError::Cancelled.to_string(), "Input cancelled by user");
    }
}
