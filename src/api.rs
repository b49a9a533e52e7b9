//! Public API surface for the portal backend.
//!
//! This file consolidates the identifier, DTO and pagination types shared by
//! the service and HTTP layers. All wire types derive Serialize/Deserialize
//! for JSON serialization.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Product identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        ProductId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId(value)
    }
}

/// Wire representation of a product.
///
/// Field-for-field mirror of [`crate::models::Product`]. `id` is absent on
/// create requests and populated on every response; the remaining optional
/// fields serialize as JSON `null` when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDto {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

/// Direction of a sort order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(format!("Unknown sort direction: '{}'", other)),
        }
    }
}

/// Product properties a paged query may sort by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    Name,
    Price,
    Quantity,
}

impl FromStr for SortProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortProperty::Id),
            "name" => Ok(SortProperty::Name),
            "price" => Ok(SortProperty::Price),
            "quantity" => Ok(SortProperty::Quantity),
            other => Err(format!("Unknown sort property: '{}'", other)),
        }
    }
}

/// Sort order in the `property[,direction]` query form.
///
/// The direction defaults to ascending when omitted, e.g. `sort=name` and
/// `sort=name,asc` parse to the same order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(property: SortProperty, direction: SortDirection) -> Self {
        Sort {
            property,
            direction,
        }
    }

    pub fn ascending(property: SortProperty) -> Self {
        Sort::new(property, SortDirection::Ascending)
    }

    pub fn descending(property: SortProperty) -> Self {
        Sort::new(property, SortDirection::Descending)
    }
}

impl Default for Sort {
    fn default() -> Self {
        Sort::ascending(SortProperty::Id)
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((property, direction)) => Ok(Sort::new(
                property.trim().parse()?,
                direction.trim().parse()?,
            )),
            None => Ok(Sort::ascending(s.trim().parse()?)),
        }
    }
}

/// Default page size when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: usize = 2000;

/// A paged query: zero-based page index, page size and sort order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Sort,
}

impl PageRequest {
    /// Builds a page request, clamping `size` to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, size: usize, sort: Sort) -> Self {
        PageRequest {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    /// Index of the first element on this page.
    ///
    /// Saturates instead of overflowing; an absurd page index lands past the
    /// end of any store and yields an empty page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new(0, DEFAULT_PAGE_SIZE, Sort::default())
    }
}

/// One page of results plus the metadata pagination headers are built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub number: usize,
    /// Requested page size; the last page may hold fewer elements.
    pub size: usize,
    /// Total number of elements across all pages.
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, number: usize, size: usize, total_elements: u64) -> Self {
        Page {
            content,
            number,
            size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size as u64)
        }
    }

    pub fn has_next(&self) -> bool {
        (self.number as u64).saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Maps the page content, preserving order and page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
