use super::ClustersMgmtAsyncClient;
use crate::clusters_mgmt::{common, ListOptions};
use crate::error::Error;
use crate::models::{ListPage, WifConfig, WifConfigList};

impl ClustersMgmtAsyncClient {
    pub async fn list_wif_configs(
        &self,
        options: &ListOptions,
    ) -> Result<ListPage<WifConfigList>, Error> {
        let url = self.build_url(&["gcp", "wif_configs"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn get_wif_config(&self, id: &str) -> Result<WifConfig, Error> {
        let url = self.build_url(&["gcp", "wif_configs", id])?;
        let mut req = self.http.get(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn post_wif_config(&self, config: &WifConfig) -> Result<WifConfig, Error> {
        let url = self.build_url(&["gcp", "wif_configs"])?;
        let mut req = self.http.post(url).json(config);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_created_json(resp).await
    }

    pub async fn delete_wif_config(&self, id: &str) -> Result<(), Error> {
        let url = self.build_url(&["gcp", "wif_configs", id])?;
        let mut req = self.http.delete(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_no_content(resp).await
    }
}
