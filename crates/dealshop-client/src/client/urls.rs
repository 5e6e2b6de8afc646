//! Endpoint URL construction for `ApiClient`.

use reqwest::Url;

use crate::error::ClientError;

use super::ApiClient;

impl ApiClient {
    /// Joins `path` onto the base URL and appends `query` pairs, URL-encoded.
    ///
    /// `path` must start with `/`. The base never ends with `/`, so the join
    /// cannot produce a doubled separator.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the joined string does not
    /// parse as a URL.
    pub(super) fn endpoint_url(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url)).map_err(|e| {
            ClientError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                reason: format!("cannot join path \"{path}\": {e}"),
            }
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}
