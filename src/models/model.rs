use crate::error::Error;

/// A built, read-only model value with a companion builder.
pub trait Model: Clone {
    type Builder: ModelBuilder<Output = Self>;

    /// Returns true when no attribute other than the link flag is set.
    fn is_empty(&self) -> bool;

    /// Returns a builder holding a deep copy of this value.
    fn to_builder(&self) -> Self::Builder {
        <Self::Builder as Default>::default().copy(self)
    }
}

/// Mutable staging type that materializes a [`Model`].
pub trait ModelBuilder: Default + Clone {
    type Output;

    /// Returns true when no attribute other than the link flag is set.
    fn is_empty(&self) -> bool;

    /// Replaces the builder state with a deep copy of `object`.
    fn copy(self, object: &Self::Output) -> Self;

    /// Builds the value, returning the first error reported by a nested builder.
    fn build(&self) -> Result<Self::Output, Error>;
}

/// List wrapper around a sequence of models.
pub trait ModelList: Model + From<Vec<Self::Item>> {
    type Item: Model;

    fn items(&self) -> &[Self::Item];
}
