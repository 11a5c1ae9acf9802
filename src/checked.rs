use crate::{InvalidState, Value};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A possibly-absent value that cannot be read without a presence check.
///
/// Construction records whether a payload was supplied; the accessors then
/// refuse to produce a payload unless one is present. There is no outward
/// conversion back to `Option`, so the check cannot be bypassed by
/// round-tripping through the raw form.
///
/// Every way of building an instance without a payload produces the same
/// value: `new(None)`, [`CheckedOptional::NONE`] and `default()` are all
/// equal and interchangeable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedOptional<T> {
    payload: Option<T>,
}

/// Wrap a possibly-absent payload.
///
/// Does the same thing as [`CheckedOptional::new`]; exists so call sites can
/// let the payload type be inferred from the argument.
pub fn optional<T>(payload: Option<T>) -> CheckedOptional<T>
where
    T: Value,
{
    CheckedOptional::new(payload)
}

impl<T> CheckedOptional<T>
where
    T: Value,
{
    /// The absent instance. Equal to `new(None)` and to `default()`.
    pub const NONE: Self = Self { payload: None };

    pub fn new(payload: Option<T>) -> Self {
        Self { payload }
    }

    pub fn has_value(&self) -> bool {
        self.payload.is_some()
    }

    pub fn has_no_value(&self) -> bool {
        !self.has_value()
    }

    /// Borrow the payload. Fails with [`InvalidState`] when there is none;
    /// never substitutes a default.
    pub fn value(&self) -> Result<&T, InvalidState> {
        self.payload.as_ref().ok_or(InvalidState)
    }

    /// Take the payload out, consuming the wrapper. Same contract as
    /// [`CheckedOptional::value`].
    pub fn into_value(self) -> Result<T, InvalidState> {
        self.payload.ok_or(InvalidState)
    }
}

impl<T> Default for CheckedOptional<T>
where
    T: Value,
{
    fn default() -> Self {
        Self::NONE
    }
}

impl<T> From<Option<T>> for CheckedOptional<T>
where
    T: Value,
{
    fn from(payload: Option<T>) -> Self {
        Self::new(payload)
    }
}

impl<T> From<T> for CheckedOptional<T>
where
    T: Value,
{
    fn from(payload: T) -> Self {
        Self::new(Some(payload))
    }
}

/// Compares the wrapper against a raw payload as if the payload had been
/// wrapped first, so an absent wrapper never equals a raw value.
///
/// The mirror impl for a bare `T` on the left does not exist: the payload
/// type's own `PartialEq` knows nothing about this wrapper. Put the wrapper
/// on the left, or compare through `Option<T>`, which works in both operand
/// orders.
impl<T> PartialEq<T> for CheckedOptional<T>
where
    T: Value,
{
    fn eq(&self, other: &T) -> bool {
        match &self.payload {
            Some(payload) => payload == other,
            None => false,
        }
    }
}

impl<T> PartialEq<Option<T>> for CheckedOptional<T>
where
    T: Value,
{
    fn eq(&self, other: &Option<T>) -> bool {
        &self.payload == other
    }
}

impl<T> PartialEq<CheckedOptional<T>> for Option<T>
where
    T: Value,
{
    fn eq(&self, other: &CheckedOptional<T>) -> bool {
        self == &other.payload
    }
}

// The presence flag goes into the hash exactly once. All absent instances
// hash alike; present instances hash by payload.
impl<T> Hash for CheckedOptional<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.payload.is_some().hash(state);
        if let Some(payload) = &self.payload {
            payload.hash(state);
        }
    }
}

/// Renders the payload exactly as the payload type would render itself, and
/// nothing at all when absent.
impl<T> fmt::Display for CheckedOptional<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => payload.fmt(f),
            None => Ok(()),
        }
    }
}
