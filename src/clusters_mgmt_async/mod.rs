mod client;

pub use client::{ClustersMgmtAsyncClient, ClustersMgmtAsyncClientBuilder};
