//! Query-string extraction.

use std::borrow::Cow;
use std::collections::HashSet;

use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::web::error::ApiError;

const INVALID_QUERY: &str = "Invalid query parameters";

/// Query extractor that reads the first value of a repeated parameter.
///
/// `?name=a&name=b` is seen as `?name=a`. Anything that still fails to
/// deserialize is rejected with a JSON [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstQuery<T>(pub T);

/// Re-encode `query` keeping only the first occurrence of each key.
fn first_values(query: &str) -> String {
    let mut seen: HashSet<Cow<'_, str>> = HashSet::new();
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if seen.insert(key.clone()) {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}

fn map_query_rejection(err: QueryRejection) -> ApiError {
    tracing::warn!(status = %err.status(), "Rejected query string");
    ApiError::bad_request(INVALID_QUERY)
}

impl<T, S> FromRequestParts<S> for FirstQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let query = first_values(parts.uri.query().unwrap_or_default());
            let uri: Uri = format!("/?{query}")
                .parse()
                .map_err(|_| ApiError::bad_request(INVALID_QUERY))?;

            let Query(value) = Query::<T>::try_from_uri(&uri).map_err(map_query_rejection)?;
            Ok(FirstQuery(value))
        })
    }
}
