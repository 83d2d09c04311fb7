use super::ClustersMgmtAsyncClient;
use crate::clusters_mgmt::{common, ListOptions};
use crate::error::Error;
use crate::models::{CloudProviderList, CloudRegionList, ListPage};

impl ClustersMgmtAsyncClient {
    pub async fn list_cloud_providers(
        &self,
        options: &ListOptions,
    ) -> Result<ListPage<CloudProviderList>, Error> {
        let url = self.build_url(&["cloud_providers"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn list_cloud_regions(
        &self,
        provider_id: &str,
        options: &ListOptions,
    ) -> Result<ListPage<CloudRegionList>, Error> {
        let url = self.build_url(&["cloud_providers", provider_id, "regions"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }
}
