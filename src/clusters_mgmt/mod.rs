mod client;
pub(crate) mod common;
mod options;

pub use client::{ClustersMgmtClient, ClustersMgmtClientBuilder};
pub use options::{DeleteClusterOptions, ListOptions};
pub(crate) use options::is_last_page;
