//! Error codes shared by every service error type.
//!
//! DESIGN
//! ======
//! Each module owns its own `thiserror` enum. Route handlers only need a
//! stable machine-readable code, a human-readable message, and whether the
//! caller may retry, so every enum implements [`ErrorCode`] and the HTTP
//! layer renders it uniformly with [`error_body`].

use serde_json::{Value, json};

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Render an error as the JSON body returned by every failing endpoint.
pub fn error_body(err: &(impl ErrorCode + ?Sized)) -> Value {
    json!({
        "error": err.to_string(),
        "code": err.error_code(),
        "retryable": err.retryable(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("nothing here")]
    struct NotFound;

    impl ErrorCode for NotFound {
        fn error_code(&self) -> &'static str {
            "E_NOT_FOUND"
        }
    }

    #[test]
    fn error_body_carries_code_message_and_retryable() {
        let body = error_body(&NotFound);
        assert_eq!(body["error"], "nothing here");
        assert_eq!(body["code"], "E_NOT_FOUND");
        assert_eq!(body["retryable"], false);
    }
}
