pub(crate) mod macros;

mod clusters_mgmt;
mod json;
mod model;
mod page;

/// Timestamp attribute type. Encoded as RFC 3339 text.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

pub use clusters_mgmt::*;
pub use json::{
    marshal, marshal_list, marshal_to_string, marshal_to_vec, unmarshal, unmarshal_reader,
};
pub use model::{Model, ModelBuilder, ModelList};
pub use page::ListPage;
