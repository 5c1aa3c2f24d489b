use std::fmt::{Display, Formatter};

use reqwest::StatusCode;

/// Failure talking to the bus API.
///
/// The variants only matter for diagnostics; the view collapses every one of
/// them into the flat message of the [`Operation`] that failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// The four operations the roster performs against the API.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// User-facing message shown when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch buses. Please try again later.",
            Operation::Create => "Failed to add bus. Please try again.",
            Operation::Update => "Failed to update bus. Please try again.",
            Operation::Delete => "Failed to delete bus. Please try again.",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Operation::Fetch => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_has_its_own_message() {
        let msgs = [Operation::Fetch, Operation::Create, Operation::Update, Operation::Delete]
            .map(Operation::failure_message);
        for (i, a) in msgs.iter().enumerate() {
            for b in &msgs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_error_mentions_code() {
        let e = ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.to_string().contains("500"));
    }
}
