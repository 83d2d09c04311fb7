use serde::{Deserialize, Serialize};

/// One page of a collection, as returned by the list endpoints.
///
/// The `items` of the response are decoded into the list wrapper `L`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "L: Deserialize<'de> + Default"))]
pub struct ListPage<L> {
    pub kind: String,
    /// Link to the collection, when the server sends one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Index of the returned page, starting at 1.
    pub page: i32,
    /// Number of items in the returned page.
    pub size: i32,
    /// Number of items in the whole collection.
    pub total: i32,
    pub items: L,
}
