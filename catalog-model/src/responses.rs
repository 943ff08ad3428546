/// Envelope for every paginated listing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaginatedItemsResponse<T> {
    pub count: i64,
    pub page_index: i32,
    pub page_size: i32,
    pub data: Vec<T>,
}

/// Body returned by the create endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateResponse<T> {
    pub id: T,
}
