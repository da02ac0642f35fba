use ord_fetch::FetchError;

#[allow(clippy::needless_pass_by_value)] // signature required for use with .map_err()
pub(crate) fn map_reqwest_err(e: reqwest::Error) -> FetchError {
    match (e.status(), e.url()) {
        (Some(status), Some(url)) => FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        },
        _ if e.is_builder() => FetchError::Other(format!("http client: {e}")),
        _ => FetchError::Request(e.to_string()),
    }
}
