use super::ClustersMgmtAsyncClient;
use crate::clusters_mgmt::{common, ListOptions};
use crate::error::Error;
use crate::models::{AddOn, AddOnInstallation, AddOnInstallationList, AddOnList, ListPage};

impl ClustersMgmtAsyncClient {
    pub async fn list_addons(&self, options: &ListOptions) -> Result<ListPage<AddOnList>, Error> {
        let url = self.build_url(&["addons"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn get_addon(&self, id: &str) -> Result<AddOn, Error> {
        let url = self.build_url(&["addons", id])?;
        let mut req = self.http.get(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn list_addon_installations(
        &self,
        cluster_id: &str,
        options: &ListOptions,
    ) -> Result<ListPage<AddOnInstallationList>, Error> {
        let url = self.build_url(&["clusters", cluster_id, "addons"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn post_addon_installation(
        &self,
        cluster_id: &str,
        installation: &AddOnInstallation,
    ) -> Result<AddOnInstallation, Error> {
        let url = self.build_url(&["clusters", cluster_id, "addons"])?;
        let mut req = self.http.post(url).json(installation);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_created_json(resp).await
    }

    pub async fn delete_addon_installation(
        &self,
        cluster_id: &str,
        addon_id: &str,
    ) -> Result<(), Error> {
        let url = self.build_url(&["clusters", cluster_id, "addons", addon_id])?;
        let mut req = self.http.delete(url);
        req = self.apply_auth(req);
        let resp = self.send(req).await?;
        self.expect_no_content(resp).await
    }
}
