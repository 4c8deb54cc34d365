use crate::api::ApiError;
use serde::ser::SerializeStruct;
use serde::Serialize;

/// Errors surfaced to the webview. Serialized as `{kind, message}` so the
/// frontend can branch: `validation` and `api` become toasts,
/// `missing_profile` redirects to profile setup, `busy` is ignored (the
/// triggering control was supposed to be disabled), `unauthorized` drops the
/// user back to the landing page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("Please set up your allergy profile first")]
    MissingProfile,
    #[error("a request for \"{0}\" is already running")]
    Busy(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::MissingProfile => "missing_profile",
            Error::Busy(_) => "busy",
            Error::Api(ApiError::Unauthorized) => "unauthorized",
            Error::Api(_) => "api",
        }
    }

    fn message(&self) -> String {
        match self {
            // Backend `detail` verbatim when present, generic fallback otherwise.
            Error::Api(e) => e.user_message("Request failed. Please try again."),
            other => other.to_string(),
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
