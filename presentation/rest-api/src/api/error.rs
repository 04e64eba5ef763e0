use poem::http::StatusCode;
use poem_openapi::payload::PlainText;

/// Maps a domain error onto an HTTP status and a plain-text body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, PlainText<String>);
}
