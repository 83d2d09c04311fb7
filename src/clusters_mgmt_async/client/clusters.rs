use super::ClustersMgmtAsyncClient;
use crate::client_defaults::DEFAULT_PAGE_SIZE;
use crate::clusters_mgmt::{common, is_last_page, DeleteClusterOptions, ListOptions};
use crate::error::Error;
use crate::models::{Cluster, ClusterList, ClusterStatus, ListPage};

impl ClustersMgmtAsyncClient {
    pub async fn list_clusters(
        &self,
        options: &ListOptions,
    ) -> Result<ListPage<ClusterList>, Error> {
        let url = self.build_url(&["clusters"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn list_all_clusters(
        &self,
        search: Option<&str>,
        page_size: Option<i32>,
    ) -> Result<ClusterList, Error> {
        let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let result = self
                .list_clusters(&ListOptions::page(page, size, search))
                .await?;
            let fetched = result.items.len();
            items.extend(result.items.into_items());
            log::debug!(
                "fetched clusters page {page}: {fetched} items, {} of {} collected",
                items.len(),
                result.total
            );
            if is_last_page(fetched, size, items.len(), result.total) {
                break;
            }
            page += 1;
        }
        Ok(ClusterList::from(items))
    }

    pub async fn get_cluster(&self, id: &str) -> Result<Cluster, Error> {
        let url = self.build_url(&["clusters", id])?;
        let mut req = self.http.get(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn post_cluster(&self, cluster: &Cluster) -> Result<Cluster, Error> {
        let url = self.build_url(&["clusters"])?;
        let mut req = self.http.post(url).json(cluster);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_created_json(resp).await
    }

    pub async fn patch_cluster(&self, id: &str, patch: &Cluster) -> Result<Cluster, Error> {
        let url = self.build_url(&["clusters", id])?;
        let mut req = self.http.patch(url).json(patch);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn delete_cluster(
        &self,
        id: &str,
        options: &DeleteClusterOptions,
    ) -> Result<(), Error> {
        let url = self.build_url(&["clusters", id])?;
        let mut req = self.http.delete(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_no_content(resp).await
    }

    pub async fn get_cluster_status(&self, id: &str) -> Result<ClusterStatus, Error> {
        let url = self.build_url(&["clusters", id, "status"])?;
        let mut req = self.http.get(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn hibernate_cluster(&self, id: &str) -> Result<(), Error> {
        let url = self.build_url(&["clusters", id, "hibernate"])?;
        let mut req = self.http.post(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_success(resp).await
    }

    pub async fn resume_cluster(&self, id: &str) -> Result<(), Error> {
        let url = self.build_url(&["clusters", id, "resume"])?;
        let mut req = self.http.post(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_success(resp).await
    }
}
