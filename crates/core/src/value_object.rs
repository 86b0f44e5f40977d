/// Marker for types compared purely by their contents, with no id of their own.
///
/// A price range or a filter selection is a value object; a product is an
/// [`Entity`](crate::Entity). Changes produce a new value
/// (`PriceRange::with_max`) rather than mutating one in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
