//! Data Transfer Objects for the HTTP API.
//!
//! Wire types owned by the HTTP layer: query parameter structs and the
//! health check response. The product DTO itself lives in [`crate::api`]
//! since the service layer speaks it on both sides.

use serde::{Deserialize, Serialize};

use crate::api::{PageRequest, Sort, DEFAULT_PAGE_SIZE};

// Re-export the entity DTO the endpoints serve
pub use crate::api::ProductDto;

/// Query parameters accepted by the paged list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: Option<usize>,
    /// Page size
    #[serde(default)]
    pub size: Option<usize>,
    /// Sort order as `property[,direction]`
    #[serde(default)]
    pub sort: Option<String>,
}

impl PageQuery {
    /// Resolve the raw query into a [`PageRequest`].
    ///
    /// Missing parameters fall back to page 0, the default size and id
    /// ascending; an unknown sort expression is an error the handler turns
    /// into a 400.
    pub fn into_page_request(self) -> Result<PageRequest, String> {
        let sort = match self.sort {
            Some(raw) => raw.parse::<Sort>()?,
            None => Sort::default(),
        };

        Ok(PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        ))
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Store connection status
    pub database: String,
}
