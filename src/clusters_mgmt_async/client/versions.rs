use super::ClustersMgmtAsyncClient;
use crate::clusters_mgmt::{common, ListOptions};
use crate::error::Error;
use crate::models::{ListPage, Version, VersionList};

impl ClustersMgmtAsyncClient {
    pub async fn list_versions(
        &self,
        options: &ListOptions,
    ) -> Result<ListPage<VersionList>, Error> {
        let url = self.build_url(&["versions"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn get_version(&self, id: &str) -> Result<Version, Error> {
        let url = self.build_url(&["versions", id])?;
        let mut req = self.http.get(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }
}
