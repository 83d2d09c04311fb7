use super::ClustersMgmtAsyncClient;
use crate::clusters_mgmt::{common, ListOptions};
use crate::error::Error;
use crate::models::{IngressList, ListPage};

impl ClustersMgmtAsyncClient {
    pub async fn list_ingresses(
        &self,
        cluster_id: &str,
        options: &ListOptions,
    ) -> Result<ListPage<IngressList>, Error> {
        let url = self.build_url(&["clusters", cluster_id, "ingresses"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }
}
