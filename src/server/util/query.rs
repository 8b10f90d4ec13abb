//! Query string access and pagination.
//!
//! Handlers receive the raw query pairs through [`QueryParams`] so that repeated keys such as
//! `?tags=lunch&tags=dinner` are preserved and pagination links can be rebuilt from the
//! request path with every other parameter left intact.

use std::str::FromStr;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    model::api::PaginatedDto,
    server::error::{validation::ValidationError, Error},
};

/// Page size used when the request does not provide `limit`
pub const DEFAULT_PAGE_SIZE: u64 = 6;
/// Upper bound for a requested `limit`
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest row position a page may reach, the database binds offsets as signed 64-bit
const MAX_ROW_POSITION: u64 = i64::MAX as u64;

/// Path and ordered query pairs of a request
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    path: String,
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(path: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            pairs,
        }
    }

    /// Parses the path and query of a request URI
    pub fn from_uri(uri: &axum::http::Uri) -> Result<Self, Error> {
        let pairs = match uri.query() {
            Some(query) => serde_urlencoded::from_str::<Vec<(String, String)>>(query)
                .map_err(|e| Error::ParseError(e.to_string()))?,
            None => Vec::new(),
        };

        Ok(Self::new(uri.path(), pairs))
    }

    /// Last value of `key`, empty values are treated as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value of a repeated key in request order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Parses the value of `key`, rejecting values that fail to parse
    pub fn parse<T: FromStr>(&self, key: &str) -> Result<Option<T>, ValidationError> {
        self.get(key)
            .map(|value| {
                value
                    .parse::<T>()
                    .map_err(|_| ValidationError::InvalidQueryParameter(key.to_string()))
            })
            .transpose()
    }

    /// Interprets a boolean flag, `1` and `true` enable it
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("1") | Some("true") | Some("True"))
    }

    /// Builds a link to the same path with `key` set to `value`
    fn link_with(&self, key: &str, value: u64) -> Result<String, Error> {
        let mut pairs: Vec<(String, String)> = self
            .pairs
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        pairs.push((key.to_string(), value.to_string()));

        let query = serde_urlencoded::to_string(&pairs)
            .map_err(|e| Error::InternalError(format!("Failed to encode query: {}", e)))?;

        Ok(format!("{}?{}", self.path, query))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_uri(&parts.uri)
    }
}

fn page_size(params: &QueryParams) -> Result<u64, ValidationError> {
    match params.parse::<u64>("limit")? {
        Some(0) => Err(ValidationError::InvalidQueryParameter("limit".to_string())),
        Some(limit) => Ok(limit.min(MAX_PAGE_SIZE)),
        None => Ok(DEFAULT_PAGE_SIZE),
    }
}

/// Page number pagination, `?page=N&limit=M` with 1-based pages
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn from_params(params: &QueryParams) -> Result<Self, ValidationError> {
        let page = match params.parse::<u64>("page")? {
            Some(0) => return Err(ValidationError::InvalidQueryParameter("page".to_string())),
            Some(page) => page,
            None => 1,
        };
        let limit = page_size(params)?;

        // Bounds the end of the page so `offset` and the next link cannot overflow
        match page.checked_mul(limit) {
            Some(end) if end <= MAX_ROW_POSITION => Ok(Self { page, limit }),
            _ => Err(ValidationError::InvalidQueryParameter("page".to_string())),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Wraps one page of results with the total count and neighbouring page links
    pub fn paginate<T>(
        &self,
        params: &QueryParams,
        results: Vec<T>,
        count: u64,
    ) -> Result<PaginatedDto<T>, Error> {
        let next = if self.page * self.limit < count {
            Some(params.link_with("page", self.page + 1)?)
        } else {
            None
        };
        let previous = if self.page > 1 {
            Some(params.link_with("page", self.page - 1)?)
        } else {
            None
        };

        Ok(PaginatedDto {
            count,
            next,
            previous,
            results,
        })
    }
}

/// Offset pagination, `?limit=M&offset=N`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetRequest {
    pub offset: u64,
    pub limit: u64,
}

impl OffsetRequest {
    pub fn from_params(params: &QueryParams) -> Result<Self, ValidationError> {
        let offset = params.parse::<u64>("offset")?.unwrap_or(0);
        let limit = page_size(params)?;

        match offset.checked_add(limit) {
            Some(end) if end <= MAX_ROW_POSITION => Ok(Self { offset, limit }),
            _ => Err(ValidationError::InvalidQueryParameter("offset".to_string())),
        }
    }

    pub fn paginate<T>(
        &self,
        params: &QueryParams,
        results: Vec<T>,
        count: u64,
    ) -> Result<PaginatedDto<T>, Error> {
        let next = if self.offset + self.limit < count {
            Some(params.link_with("offset", self.offset + self.limit)?)
        } else {
            None
        };
        let previous = if self.offset > 0 {
            Some(params.link_with("offset", self.offset.saturating_sub(self.limit))?)
        } else {
            None
        };

        Ok(PaginatedDto {
            count,
            next,
            previous,
            results,
        })
    }
}
