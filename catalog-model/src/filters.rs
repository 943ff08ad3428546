/// Keys accepted in the `filters` map of a paginated item request.
///
/// Serialized by variant name, so a request carries `{"Brand": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogTypeFilter {
    Brand,
}
