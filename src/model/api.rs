use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single page of a paginated collection
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedDto<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Link to the next page, absent on the last page
    pub next: Option<String>,
    /// Link to the previous page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<T>,
}
