//! Archive request URL construction
//!
//! Turns a selected month and API key into the fully-formed GET URL the
//! archive API expects: `{base}/{year}/{month}.json?api-key={key}` with an
//! unpadded month segment.

use crate::error::{Error, Result};
use crate::types::MonthInfo;
use url::Url;

/// Build the request URL for one archive month
///
/// The year and month ride as path segments (month unpadded) and the key as
/// the `api-key` query parameter, percent-encoded by the URL serializer. The
/// base endpoint may or may not carry a trailing slash.
///
/// # Errors
///
/// Returns [`Error::Config`] if `api_key` is empty or blank, or if `base` is
/// a URL that cannot carry path segments. Year and month receive no further
/// validation; they are assumed already clamped by
/// [`MonthRange`](crate::MonthRange).
pub fn build_request(base: &Url, month: MonthInfo, api_key: &str) -> Result<Url> {
    if api_key.trim().is_empty() {
        return Err(Error::Config {
            message: "API key must not be empty".to_string(),
            key: Some("api_key".to_string()),
        });
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::Config {
            message: format!("endpoint cannot carry path segments: {base}"),
            key: Some("endpoint".to_string()),
        })?
        .pop_if_empty()
        .push(&month.year.to_string())
        .push(&format!("{}.json", month.month));
    url.query_pairs_mut().append_pair("api-key", api_key);

    Ok(url)
}
