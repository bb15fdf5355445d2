use url::Url;

use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, ValidationError};

/// One outbound GET and its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestJob {
    pub index: usize,
    pub url: Url,
}

/// Parses every URL up front so a malformed entry fails the batch before
/// any request is sent.
///
/// # Errors
///
/// Returns a validation error for an unparsable URL, a non-HTTP scheme, or a
/// batch too large to allocate.
pub fn build_jobs<S>(urls: &[S]) -> AppResult<Vec<RequestJob>>
where
    S: AsRef<str>,
{
    let mut jobs = Vec::new();
    reserve(&mut jobs, urls.len())?;
    for (index, raw) in urls.iter().enumerate() {
        let raw = raw.as_ref();
        let url = Url::parse(raw).map_err(|err| {
            AppError::validation(ValidationError::InvalidUrl {
                url: raw.to_owned(),
                source: err,
            })
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                url: raw.to_owned(),
            }));
        }
        jobs.push(RequestJob { index, url });
    }
    Ok(jobs)
}

/// `count` copies of `url`.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyRequests`] when the list cannot be
/// allocated.
pub fn repeat_url(url: &str, count: PositiveUsize) -> AppResult<Vec<String>> {
    let mut urls = Vec::new();
    reserve(&mut urls, count.get())?;
    urls.extend(std::iter::repeat_n(url.to_owned(), count.get()));
    Ok(urls)
}

fn reserve<T>(items: &mut Vec<T>, count: usize) -> AppResult<()> {
    items
        .try_reserve_exact(count)
        .map_err(|err| {
            AppError::validation(ValidationError::TooManyRequests { count, source: err })
        })
}
