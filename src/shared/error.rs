//! Usage: Unified bridge error model (maps internal failures to `CODE: message` strings).

use std::sync::Arc;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AppError {
    code: String,
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Splits `"SOME_CODE: message"` into its code and message parts. The code
/// must be SCREAMING_SNAKE_CASE; anything else is treated as a bare message.
fn split_code_message(raw: &str) -> Option<(&str, &str)> {
    let (maybe_code, rest) = raw.trim().split_once(':')?;
    let code = maybe_code.trim();
    if code.is_empty() || !code.chars().next()?.is_ascii_uppercase() {
        return None;
    }
    if !code
        .chars()
        .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_')
    {
        return None;
    }
    Some((code, rest.trim()))
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        match split_code_message(&value) {
            Some((code, message)) if !message.is_empty() => {
                AppError::new(code.to_string(), message.to_string())
            }
            _ => AppError::new("INTERNAL_ERROR", value.trim()),
        }
    }
}

impl From<&'static str> for AppError {
    fn from(value: &'static str) -> Self {
        AppError::from(value.to_string())
    }
}

impl From<AppError> for String {
    fn from(value: AppError) -> Self {
        value.to_string()
    }
}
