//! Encoding and decoding entry points shared by every model type.

use crate::error::Error;
use crate::models::{Model, ModelList};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Writes the JSON form of `object` to `writer`.
pub fn marshal<T, W>(object: &T, writer: W) -> Result<(), Error>
where
    T: Model + Serialize,
    W: Write,
{
    serde_json::to_writer(writer, object)?;
    Ok(())
}

pub fn marshal_to_vec<T>(object: &T) -> Result<Vec<u8>, Error>
where
    T: Model + Serialize,
{
    Ok(serde_json::to_vec(object)?)
}

pub fn marshal_to_string<T>(object: &T) -> Result<String, Error>
where
    T: Model + Serialize,
{
    Ok(serde_json::to_string(object)?)
}

/// Writes the items of `list` as a bare JSON array, without the `kind` and
/// `href` wrapper.
pub fn marshal_list<L, W>(list: &L, writer: W) -> Result<(), Error>
where
    L: ModelList,
    L::Item: Serialize,
    W: Write,
{
    serde_json::to_writer(writer, list.items())?;
    Ok(())
}

/// Decodes a model from JSON text held in memory.
///
/// List types accept both the bare array and the `{"kind", "href", "items"}`
/// object.
pub fn unmarshal<T>(source: impl AsRef<[u8]>) -> Result<T, Error>
where
    T: Model + DeserializeOwned,
{
    Ok(serde_json::from_slice(source.as_ref())?)
}

pub fn unmarshal_reader<T, R>(reader: R) -> Result<T, Error>
where
    T: Model + DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CloudProvider, CloudProviderList, Version};

    #[test]
    fn marshal_list_writes_bare_array() {
        let list = CloudProviderList::from(vec![
            CloudProvider::builder().id("aws").build().expect("build"),
            CloudProvider::builder().id("gcp").build().expect("build"),
        ]);
        let mut out = Vec::new();
        marshal_list(&list, &mut out).expect("marshal");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            r#"[{"kind":"CloudProvider","id":"aws"},{"kind":"CloudProvider","id":"gcp"}]"#
        );
    }

    #[test]
    fn unmarshal_accepts_str_and_bytes() {
        let text = r#"{"kind":"Version","id":"openshift-v4.16.3","raw_id":"4.16.3"}"#;
        let from_str: Version = unmarshal(text).expect("str");
        let from_bytes: Version = unmarshal(text.as_bytes()).expect("bytes");
        assert_eq!(from_str, from_bytes);
        assert_eq!(from_str.raw_id(), "4.16.3");
    }

    #[test]
    fn unmarshal_reports_syntax_errors() {
        let err = unmarshal::<Version>("{\"id\":").expect_err("must fail");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn unmarshal_rejects_non_object() {
        let err = unmarshal::<Version>("[1,2]").expect_err("must fail");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn marshal_to_string_matches_writer() {
        let version = Version::builder()
            .id("openshift-v4.16.3")
            .default(true)
            .build()
            .expect("build");
        let mut out = Vec::new();
        marshal(&version, &mut out).expect("marshal");
        assert_eq!(marshal_to_vec(&version).expect("vec"), out);
        assert_eq!(
            marshal_to_string(&version).expect("string"),
            r#"{"kind":"Version","id":"openshift-v4.16.3","default":true}"#
        );
    }
}
