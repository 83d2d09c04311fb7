//! Generators for the model types.
//!
//! Every attribute is declared as `name: category<Type> => "json_name"`.
//! The category decides how the attribute is stored, read and built:
//!
//! | category      | model storage                  | builder storage                         |
//! |---------------|--------------------------------|-----------------------------------------|
//! | `string`      | `Option<String>`               | same                                    |
//! | `value`       | `Option<T>` (`T: Copy`)        | same                                    |
//! | `enumeration` | `Option<T>`                    | same                                    |
//! | `values`      | `Option<Vec<T>>`               | same                                    |
//! | `value_map`   | `Option<BTreeMap<String, T>>`  | same                                    |
//! | `object`      | `Option<T>`                    | `Option<T::Builder>`                    |
//! | `objects`     | `Option<Vec<T>>`               | `Option<Vec<T::Builder>>`               |
//! | `object_map`  | `Option<BTreeMap<String, T>>`  | `Option<BTreeMap<String, T::Builder>>`  |
//!
//! Nested list wrappers use the `object` category.

macro_rules! ocm_attr {
    (@model string<$ty:ty>) => { ::std::option::Option<::std::string::String> };
    (@model value<$ty:ty>) => { ::std::option::Option<$ty> };
    (@model enumeration<$ty:ty>) => { ::std::option::Option<$ty> };
    (@model values<$ty:ty>) => { ::std::option::Option<::std::vec::Vec<$ty>> };
    (@model value_map<$ty:ty>) => {
        ::std::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>
    };
    (@model object<$ty:ty>) => { ::std::option::Option<$ty> };
    (@model objects<$ty:ty>) => { ::std::option::Option<::std::vec::Vec<$ty>> };
    (@model object_map<$ty:ty>) => {
        ::std::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>
    };

    (@builder object<$ty:ty>) => {
        ::std::option::Option<<$ty as $crate::models::Model>::Builder>
    };
    (@builder objects<$ty:ty>) => {
        ::std::option::Option<::std::vec::Vec<<$ty as $crate::models::Model>::Builder>>
    };
    (@builder object_map<$ty:ty>) => {
        ::std::option::Option<
            ::std::collections::BTreeMap<
                ::std::string::String,
                <$ty as $crate::models::Model>::Builder,
            >,
        >
    };
    (@builder $cat:ident<$ty:ty>) => { $crate::models::macros::ocm_attr!(@model $cat<$ty>) };

    (@getters [$(#[$m:meta])*] $field:ident string<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(&self) -> &str {
            self.$field.as_deref().unwrap_or("")
        }

        ::paste::paste! {
            #[doc = "Returns the `" $field "` attribute, or `None` when it is not set."]
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&str> {
                self.$field.as_deref()
            }
        }
    };
    (@getters [$(#[$m:meta])*] $field:ident value<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(&self) -> $ty {
            self.$field.unwrap_or_default()
        }

        ::paste::paste! {
            #[doc = "Returns the `" $field "` attribute, or `None` when it is not set."]
            pub fn [<get_ $field>](&self) -> ::std::option::Option<$ty> {
                self.$field
            }
        }
    };
    (@getters [$(#[$m:meta])*] $field:ident values<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(&self) -> &[$ty] {
            self.$field.as_deref().unwrap_or(&[])
        }

        ::paste::paste! {
            #[doc = "Returns the `" $field "` attribute, or `None` when it is not set."]
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&[$ty]> {
                self.$field.as_deref()
            }
        }
    };
    (@getters [$(#[$m:meta])*] $field:ident objects<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(@getters [$(#[$m])*] $field values<$ty>);
    };
    (@getters [$(#[$m:meta])*] $field:ident value_map<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(&self) -> &::std::collections::BTreeMap<::std::string::String, $ty> {
            static EMPTY: ::std::collections::BTreeMap<::std::string::String, $ty> =
                ::std::collections::BTreeMap::new();
            self.$field.as_ref().unwrap_or(&EMPTY)
        }

        ::paste::paste! {
            #[doc = "Returns the `" $field "` attribute, or `None` when it is not set."]
            pub fn [<get_ $field>](
                &self,
            ) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, $ty>>
            {
                self.$field.as_ref()
            }
        }
    };
    (@getters [$(#[$m:meta])*] $field:ident object_map<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(@getters [$(#[$m])*] $field value_map<$ty>);
    };
    (@getters [$(#[$m:meta])*] $field:ident enumeration<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (@getters [$(#[$m:meta])*] $field:ident object<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };

    (@setter [$(#[$m:meta])*] $field:ident string<$ty:ty>) => {
        $(#[$m])*
        pub fn $field(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.$field = ::std::option::Option::Some(value.into());
            self
        }
    };
    (@setter [$(#[$m:meta])*] $field:ident value<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(@set [$(#[$m])*] $field $ty);
    };
    (@setter [$(#[$m:meta])*] $field:ident enumeration<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(@set [$(#[$m])*] $field $ty);
    };
    (@setter [$(#[$m:meta])*] $field:ident values<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(@set [$(#[$m])*] $field ::std::vec::Vec<$ty>);
    };
    (@setter [$(#[$m:meta])*] $field:ident value_map<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(
            @set [$(#[$m])*] $field ::std::collections::BTreeMap<::std::string::String, $ty>
        );
    };
    (@setter [$(#[$m:meta])*] $field:ident object<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(
            @set [$(#[$m])*] $field <$ty as $crate::models::Model>::Builder
        );
    };
    (@setter [$(#[$m:meta])*] $field:ident objects<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(
            @set [$(#[$m])*] $field ::std::vec::Vec<<$ty as $crate::models::Model>::Builder>
        );
    };
    (@setter [$(#[$m:meta])*] $field:ident object_map<$ty:ty>) => {
        $crate::models::macros::ocm_attr!(
            @set [$(#[$m])*] $field ::std::collections::BTreeMap<
                ::std::string::String,
                <$ty as $crate::models::Model>::Builder,
            >
        );
    };
    (@set [$(#[$m:meta])*] $field:ident $arg:ty) => {
        $(#[$m])*
        pub fn $field(mut self, value: $arg) -> Self {
            self.$field = ::std::option::Option::Some(value);
            self
        }
    };

    (@copy object<$ty:ty>, $src:expr) => {
        $src.as_ref().map($crate::models::Model::to_builder)
    };
    (@copy objects<$ty:ty>, $src:expr) => {
        $src.as_ref()
            .map(|items| items.iter().map($crate::models::Model::to_builder).collect())
    };
    (@copy object_map<$ty:ty>, $src:expr) => {
        $src.as_ref().map(|items| {
            items
                .iter()
                .map(|(key, item)| (key.clone(), $crate::models::Model::to_builder(item)))
                .collect()
        })
    };
    (@copy $cat:ident<$ty:ty>, $src:expr) => {
        $src.clone()
    };

    (@build object<$ty:ty>, $src:expr) => {
        match $src {
            ::std::option::Option::Some(builder) => {
                ::std::option::Option::Some($crate::models::ModelBuilder::build(builder)?)
            }
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
    (@build objects<$ty:ty>, $src:expr) => {
        match $src {
            ::std::option::Option::Some(builders) => ::std::option::Option::Some(
                builders
                    .iter()
                    .map($crate::models::ModelBuilder::build)
                    .collect::<::std::result::Result<::std::vec::Vec<_>, _>>()?,
            ),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
    (@build object_map<$ty:ty>, $src:expr) => {
        match $src {
            ::std::option::Option::Some(builders) => ::std::option::Option::Some(
                builders
                    .iter()
                    .map(|(key, builder)| {
                        $crate::models::ModelBuilder::build(builder).map(|item| (key.clone(), item))
                    })
                    .collect::<::std::result::Result<::std::collections::BTreeMap<_, _>, _>>()?,
            ),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
    (@build $cat:ident<$ty:ty>, $src:expr) => {
        $src.clone()
    };
}

/// Shared map-decoding loop: assigns known keys, skips the rest.
macro_rules! ocm_read_fields {
    ($map:ident, $object:ident, $kind:literal, $key:ident, { $($extra:tt)* }, $( $field:ident => $json:literal ),*) => {
        while let ::std::option::Option::Some($key) =
            ::serde::de::MapAccess::next_key::<::std::string::String>(&mut $map)?
        {
            match $key.as_str() {
                $($extra)*
                $( $json => $object.$field = ::serde::de::MapAccess::next_value(&mut $map)?, )*
                _ => {
                    ::log::trace!("skipping unknown field '{}' of {}", $key, $kind);
                    ::serde::de::MapAccess::next_value::<::serde::de::IgnoredAny>(&mut $map)?;
                }
            }
        }
    };
}

/// Declares an identifiable type: it carries `kind`, `id` and `href`, and can
/// be a link to the full object.
macro_rules! ocm_class {
    (
        $(#[$meta:meta])*
        $name:ident($kind:literal), $builder:ident, $list:ident, $list_builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $cat:ident<$ty:ty> => $json:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            link: bool,
            id: ::std::option::Option<::std::string::String>,
            href: ::std::option::Option<::std::string::String>,
            $( $field: $crate::models::macros::ocm_attr!(@model $cat<$ty>), )*
        }

        impl $name {
            /// Kind used when the object is fully populated.
            pub const KIND: &'static str = $kind;
            /// Kind used when the object is a link.
            pub const LINK_KIND: &'static str = concat!($kind, "Link");

            pub fn builder() -> $builder {
                <$builder as ::std::default::Default>::default()
            }

            /// Returns the name of the type of the object.
            pub fn kind(&self) -> &'static str {
                if self.link {
                    Self::LINK_KIND
                } else {
                    Self::KIND
                }
            }

            /// Returns true if this is a link.
            pub fn link(&self) -> bool {
                self.link
            }

            /// Returns the identifier of the object.
            pub fn id(&self) -> &str {
                self.id.as_deref().unwrap_or("")
            }

            pub fn get_id(&self) -> ::std::option::Option<&str> {
                self.id.as_deref()
            }

            /// Returns the link to the object.
            pub fn href(&self) -> &str {
                self.href.as_deref().unwrap_or("")
            }

            pub fn get_href(&self) -> ::std::option::Option<&str> {
                self.href.as_deref()
            }

            /// Returns true if no attribute other than the link flag is set.
            pub fn is_empty(&self) -> bool {
                self.id.is_none() && self.href.is_none() $( && self.$field.is_none() )*
            }

            $( $crate::models::macros::ocm_attr!(@getters [$(#[$fmeta])*] $field $cat<$ty>); )*
        }

        impl $crate::models::Model for $name {
            type Builder = $builder;

            fn is_empty(&self) -> bool {
                $name::is_empty(self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(::std::option::Option::None)?;
                map.serialize_entry("kind", self.kind())?;
                if let ::std::option::Option::Some(id) = &self.id {
                    map.serialize_entry("id", id)?;
                }
                if let ::std::option::Option::Some(href) = &self.href {
                    map.serialize_entry("href", href)?;
                }
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        map.serialize_entry($json, value)?;
                    }
                )*
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct ObjectVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ObjectVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a ", $kind, " object"))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<$name, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let mut object = <$name as ::std::default::Default>::default();
                        $crate::models::macros::ocm_read_fields!(map, object, $kind, key, {
                            "kind" => {
                                let kind: ::std::option::Option<::std::string::String> =
                                    ::serde::de::MapAccess::next_value(&mut map)?;
                                object.link = kind.as_deref() == ::std::option::Option::Some($name::LINK_KIND);
                            }
                            "id" => object.id = ::serde::de::MapAccess::next_value(&mut map)?,
                            "href" => object.href = ::serde::de::MapAccess::next_value(&mut map)?,
                        }, $( $field => $json ),*);
                        ::std::result::Result::Ok(object)
                    }
                }

                deserializer.deserialize_map(ObjectVisitor)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            link: bool,
            id: ::std::option::Option<::std::string::String>,
            href: ::std::option::Option<::std::string::String>,
            $( $field: $crate::models::macros::ocm_attr!(@builder $cat<$ty>), )*
        }

        impl $builder {
            pub fn new() -> Self {
                <Self as ::std::default::Default>::default()
            }

            /// Sets the flag that indicates if this is a link.
            pub fn link(mut self, value: bool) -> Self {
                self.link = value;
                self
            }

            pub fn id(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.id = ::std::option::Option::Some(value.into());
                self
            }

            pub fn href(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.href = ::std::option::Option::Some(value.into());
                self
            }

            $( $crate::models::macros::ocm_attr!(@setter [$(#[$fmeta])*] $field $cat<$ty>); )*

            /// Returns true if no attribute other than the link flag is set.
            pub fn is_empty(&self) -> bool {
                self.id.is_none() && self.href.is_none() $( && self.$field.is_none() )*
            }

            /// Replaces the state of the builder with a deep copy of `object`.
            pub fn copy(mut self, object: &$name) -> Self {
                self.link = object.link;
                self.id = object.id.clone();
                self.href = object.href.clone();
                $( self.$field = $crate::models::macros::ocm_attr!(@copy $cat<$ty>, object.$field); )*
                self
            }

            pub fn build(&self) -> ::std::result::Result<$name, $crate::error::Error> {
                ::std::result::Result::Ok($name {
                    link: self.link,
                    id: self.id.clone(),
                    href: self.href.clone(),
                    $( $field: $crate::models::macros::ocm_attr!(@build $cat<$ty>, &self.$field), )*
                })
            }
        }

        impl $crate::models::ModelBuilder for $builder {
            type Output = $name;

            fn is_empty(&self) -> bool {
                $builder::is_empty(self)
            }

            fn copy(self, object: &$name) -> Self {
                $builder::copy(self, object)
            }

            fn build(&self) -> ::std::result::Result<$name, $crate::error::Error> {
                $builder::build(self)
            }
        }

        $crate::models::macros::ocm_list!($name($kind), $builder, $list, $list_builder);
    };
}

/// Declares a plain value type without identity.
macro_rules! ocm_struct {
    (
        $(#[$meta:meta])*
        $name:ident($kind:literal), $builder:ident, $list:ident, $list_builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $cat:ident<$ty:ty> => $json:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $field: $crate::models::macros::ocm_attr!(@model $cat<$ty>), )*
        }

        impl $name {
            pub fn builder() -> $builder {
                <$builder as ::std::default::Default>::default()
            }

            /// Returns true if no attribute is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            $( $crate::models::macros::ocm_attr!(@getters [$(#[$fmeta])*] $field $cat<$ty>); )*
        }

        impl $crate::models::Model for $name {
            type Builder = $builder;

            fn is_empty(&self) -> bool {
                $name::is_empty(self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(::std::option::Option::None)?;
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        map.serialize_entry($json, value)?;
                    }
                )*
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct ObjectVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ObjectVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a ", $kind, " object"))
                    }

                    #[allow(unused_mut)]
                    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<$name, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let mut object = <$name as ::std::default::Default>::default();
                        $crate::models::macros::ocm_read_fields!(map, object, $kind, key, {}, $( $field => $json ),*);
                        ::std::result::Result::Ok(object)
                    }
                }

                deserializer.deserialize_map(ObjectVisitor)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $( $field: $crate::models::macros::ocm_attr!(@builder $cat<$ty>), )*
        }

        impl $builder {
            pub fn new() -> Self {
                <Self as ::std::default::Default>::default()
            }

            $( $crate::models::macros::ocm_attr!(@setter [$(#[$fmeta])*] $field $cat<$ty>); )*

            /// Returns true if no attribute is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Replaces the state of the builder with a deep copy of `object`.
            #[allow(unused_mut, unused_variables)]
            pub fn copy(mut self, object: &$name) -> Self {
                $( self.$field = $crate::models::macros::ocm_attr!(@copy $cat<$ty>, object.$field); )*
                self
            }

            pub fn build(&self) -> ::std::result::Result<$name, $crate::error::Error> {
                ::std::result::Result::Ok($name {
                    $( $field: $crate::models::macros::ocm_attr!(@build $cat<$ty>, &self.$field), )*
                })
            }
        }

        impl $crate::models::ModelBuilder for $builder {
            type Output = $name;

            fn is_empty(&self) -> bool {
                $builder::is_empty(self)
            }

            fn copy(self, object: &$name) -> Self {
                $builder::copy(self, object)
            }

            fn build(&self) -> ::std::result::Result<$name, $crate::error::Error> {
                $builder::build(self)
            }
        }

        $crate::models::macros::ocm_list!($name($kind), $builder, $list, $list_builder);
    };
}

/// Declares the list wrapper and list builder of a model type.
macro_rules! ocm_list {
    ($item:ident($kind:literal), $item_builder:ident, $list:ident, $list_builder:ident) => {
        #[doc = concat!("List of [`", stringify!($item), "`] values.")]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $list {
            href: ::std::option::Option<::std::string::String>,
            link: bool,
            items: ::std::vec::Vec<$item>,
        }

        impl $list {
            pub const KIND: &'static str = concat!($kind, "List");
            pub const LINK_KIND: &'static str = concat!($kind, "ListLink");

            pub fn new() -> Self {
                <Self as ::std::default::Default>::default()
            }

            pub fn builder() -> $list_builder {
                <$list_builder as ::std::default::Default>::default()
            }

            /// Returns the name of the type of the list.
            pub fn kind(&self) -> &'static str {
                if self.link {
                    Self::LINK_KIND
                } else {
                    Self::KIND
                }
            }

            /// Returns true if this is a link to the list.
            pub fn link(&self) -> bool {
                self.link
            }

            /// Returns the link to the list.
            pub fn href(&self) -> &str {
                self.href.as_deref().unwrap_or("")
            }

            /// Returns the link to the list, or `None` when it is empty.
            pub fn get_href(&self) -> ::std::option::Option<&str> {
                self.href.as_deref().filter(|href| !href.is_empty())
            }

            pub fn len(&self) -> usize {
                self.items.len()
            }

            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            pub fn set_link(&mut self, link: bool) {
                self.link = link;
            }

            pub fn set_href(&mut self, href: impl ::std::convert::Into<::std::string::String>) {
                self.href = ::std::option::Option::Some(href.into());
            }

            pub fn set_items(&mut self, items: ::std::vec::Vec<$item>) {
                self.items = items;
            }

            pub fn items(&self) -> &[$item] {
                &self.items
            }

            /// Returns the item at `index`, or `None` when it is out of range.
            pub fn get(&self, index: usize) -> ::std::option::Option<&$item> {
                self.items.get(index)
            }

            /// Consumes the list and returns its items.
            pub fn into_items(self) -> ::std::vec::Vec<$item> {
                self.items
            }

            /// Returns a copy of the items. Prefer [`Self::each`] or
            /// [`Self::iter`] when the copy is not going to be modified.
            pub fn slice(&self) -> ::std::vec::Vec<$item> {
                self.items.clone()
            }

            pub fn iter(&self) -> ::std::slice::Iter<'_, $item> {
                self.items.iter()
            }

            /// Calls `f` for each item, in order, until it returns false.
            pub fn each<F>(&self, mut f: F)
            where
                F: FnMut(&$item) -> bool,
            {
                for item in &self.items {
                    if !f(item) {
                        break;
                    }
                }
            }

            /// Calls `f` with the index and item of each element, in order,
            /// until it returns false.
            pub fn range<F>(&self, mut f: F)
            where
                F: FnMut(usize, &$item) -> bool,
            {
                for (index, item) in self.items.iter().enumerate() {
                    if !f(index, item) {
                        break;
                    }
                }
            }
        }

        impl ::std::convert::From<::std::vec::Vec<$item>> for $list {
            fn from(items: ::std::vec::Vec<$item>) -> Self {
                Self {
                    href: ::std::option::Option::None,
                    link: false,
                    items,
                }
            }
        }

        impl<'a> ::std::iter::IntoIterator for &'a $list {
            type Item = &'a $item;
            type IntoIter = ::std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }

        impl $crate::models::Model for $list {
            type Builder = $list_builder;

            fn is_empty(&self) -> bool {
                self.items.is_empty()
            }
        }

        impl $crate::models::ModelList for $list {
            type Item = $item;

            fn items(&self) -> &[$item] {
                &self.items
            }
        }

        impl ::serde::Serialize for $list {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(::std::option::Option::None)?;
                map.serialize_entry("kind", self.kind())?;
                if let ::std::option::Option::Some(href) = &self.href {
                    map.serialize_entry("href", href)?;
                }
                map.serialize_entry("items", &self.items)?;
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $list {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct ListVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ListVisitor {
                    type Value = $list;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("an array or object holding a ", $kind, " list"))
                    }

                    fn visit_unit<E>(self) -> ::std::result::Result<$list, E>
                    where
                        E: ::serde::de::Error,
                    {
                        ::std::result::Result::Ok($list::new())
                    }

                    fn visit_none<E>(self) -> ::std::result::Result<$list, E>
                    where
                        E: ::serde::de::Error,
                    {
                        ::std::result::Result::Ok($list::new())
                    }

                    // A null element decodes as an empty item.
                    fn visit_seq<A>(self, mut seq: A) -> ::std::result::Result<$list, A::Error>
                    where
                        A: ::serde::de::SeqAccess<'de>,
                    {
                        let mut items = ::std::vec::Vec::new();
                        while let ::std::option::Option::Some(item) =
                            seq.next_element::<::std::option::Option<$item>>()?
                        {
                            items.push(item.unwrap_or_default());
                        }
                        ::std::result::Result::Ok($list::from(items))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<$list, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let mut list = $list::new();
                        while let ::std::option::Option::Some(key) =
                            map.next_key::<::std::string::String>()?
                        {
                            match key.as_str() {
                                "kind" => {
                                    let kind: ::std::option::Option<::std::string::String> =
                                        map.next_value()?;
                                    list.link = kind.as_deref() == ::std::option::Option::Some($list::LINK_KIND);
                                }
                                "href" => list.href = map.next_value()?,
                                "items" => {
                                    let items: ::std::option::Option<
                                        ::std::vec::Vec<::std::option::Option<$item>>,
                                    > = map.next_value()?;
                                    list.items = items
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(::std::option::Option::unwrap_or_default)
                                        .collect();
                                }
                                _ => {
                                    ::log::trace!("skipping unknown field '{}' of {}", key, $list::KIND);
                                    map.next_value::<::serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        ::std::result::Result::Ok(list)
                    }
                }

                deserializer.deserialize_any(ListVisitor)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($list), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $list_builder {
            link: bool,
            href: ::std::option::Option<::std::string::String>,
            items: ::std::vec::Vec<$item_builder>,
        }

        impl $list_builder {
            pub fn new() -> Self {
                <Self as ::std::default::Default>::default()
            }

            pub fn link(mut self, value: bool) -> Self {
                self.link = value;
                self
            }

            pub fn href(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.href = ::std::option::Option::Some(value.into());
                self
            }

            pub fn items(mut self, values: ::std::vec::Vec<$item_builder>) -> Self {
                self.items = values;
                self
            }

            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            pub fn copy(mut self, list: &$list) -> Self {
                self.link = list.link;
                self.href = list.href.clone();
                self.items = list
                    .items
                    .iter()
                    .map($crate::models::Model::to_builder)
                    .collect();
                self
            }

            pub fn build(&self) -> ::std::result::Result<$list, $crate::error::Error> {
                let items = self
                    .items
                    .iter()
                    .map($item_builder::build)
                    .collect::<::std::result::Result<::std::vec::Vec<_>, _>>()?;
                ::std::result::Result::Ok($list {
                    href: self.href.clone(),
                    link: self.link,
                    items,
                })
            }
        }

        impl $crate::models::ModelBuilder for $list_builder {
            type Output = $list;

            fn is_empty(&self) -> bool {
                $list_builder::is_empty(self)
            }

            fn copy(self, list: &$list) -> Self {
                $list_builder::copy(self, list)
            }

            fn build(&self) -> ::std::result::Result<$list, $crate::error::Error> {
                $list_builder::build(self)
            }
        }
    };
}

/// Declares a string-valued enumeration. Values unknown to this crate are
/// kept verbatim in the `Other` variant so they survive a round trip.
macro_rules! ocm_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// Value not known to this version of the crate.
            Other(::std::string::String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok(Self::from(value.as_str()))
            }
        }
    };
}

pub(crate) use ocm_attr;
pub(crate) use ocm_class;
pub(crate) use ocm_enum;
pub(crate) use ocm_list;
pub(crate) use ocm_read_fields;
pub(crate) use ocm_struct;
