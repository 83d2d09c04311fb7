/// Paging and filtering parameters shared by the list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Index of the requested page, starting at 1.
    pub page: Option<i32>,
    /// Maximum number of items in the page.
    pub size: Option<i32>,
    /// SQL-like filter, for example `name like 'prod-%'`.
    pub search: Option<String>,
    /// SQL-like ordering, for example `creation_timestamp desc`.
    pub order: Option<String>,
}

impl ListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(ref order) = self.order {
            pairs.push(("order", order.clone()));
        }
        pairs
    }

    /// Options for page `page` of size `size` with the given filter.
    pub(crate) fn page(page: i32, size: i32, search: Option<&str>) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            search: search.map(str::to_string),
            order: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteClusterOptions {
    /// When false, the cluster is removed from OCM but its cloud resources
    /// are left in place.
    pub deprovision: Option<bool>,
    /// Continue deleting even if some cloud resources can't be removed.
    pub best_effort: Option<bool>,
}

impl DeleteClusterOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(deprovision) = self.deprovision {
            pairs.push(("deprovision", deprovision.to_string()));
        }
        if let Some(best_effort) = self.best_effort {
            pairs.push(("best_effort", best_effort.to_string()));
        }
        pairs
    }
}

/// Returns true when no more pages need to be fetched after a page that
/// carried `fetched` items.
pub(crate) fn is_last_page(fetched: usize, size: i32, collected: usize, total: i32) -> bool {
    fetched == 0
        || fetched < size.max(1) as usize
        || (total > 0 && collected >= total as usize)
}
