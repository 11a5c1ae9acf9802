use crate::{InvalidState, Value};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

// The three observable states, kept as one enum so that "unresolved with a
// payload" is not representable.
#[derive(Clone, Debug, PartialEq, Eq)]
enum State<T> {
    Pending,
    Resolved(Option<T>),
}

/// A result slot that may not have been filled yet.
///
/// Where [`CheckedOptional`](crate::CheckedOptional) distinguishes present
/// from absent, this type adds a third state for a value whose producer has
/// not reported back: *unresolved*. A completed lookup that found nothing
/// and a lookup still in flight both lack a value, but they are different
/// observations and compare as unequal.
///
/// The constructor always produces a resolved instance, even for `None`.
/// The only unresolved instance is the default one, also available as
/// [`EventualCheckedOptional::PENDING`]. As a consequence, unlike the
/// two-state wrapper, `default()` and `new(None)` are NOT equal here.
///
/// The type itself is inert data. It provides no waiting and no
/// notification; a producer builds one and hands it over through whatever
/// channel the surrounding code uses, and the consumer checks
/// `is_resolved` before trusting `has_value` to mean "absent" rather than
/// "not yet known".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventualCheckedOptional<T> {
    state: State<T>,
}

/// Wrap a possibly-absent payload as a resolved result.
///
/// Does the same thing as [`EventualCheckedOptional::new`]; exists so call
/// sites can let the payload type be inferred from the argument.
pub fn eventual<T>(payload: Option<T>) -> EventualCheckedOptional<T>
where
    T: Value,
{
    EventualCheckedOptional::new(payload)
}

impl<T> EventualCheckedOptional<T>
where
    T: Value,
{
    /// The unresolved instance. Equal to `default()` and to nothing else.
    pub const PENDING: Self = Self {
        state: State::Pending,
    };

    /// The resolved-but-absent instance. Equal to `new(None)`, not to
    /// [`EventualCheckedOptional::PENDING`].
    pub const NO_VALUE: Self = Self {
        state: State::Resolved(None),
    };

    /// Builds a resolved instance; `None` means "looked and found nothing",
    /// not "still pending".
    pub fn new(payload: Option<T>) -> Self {
        Self {
            state: State::Resolved(payload),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, State::Resolved(_))
    }

    pub fn is_not_resolved(&self) -> bool {
        !self.is_resolved()
    }

    pub fn has_value(&self) -> bool {
        matches!(self.state, State::Resolved(Some(_)))
    }

    pub fn has_no_value(&self) -> bool {
        !self.has_value()
    }

    /// Borrow the payload. Fails with [`InvalidState`] when unresolved just
    /// as when resolved without a value; check `is_resolved` first to tell
    /// the two apart.
    pub fn value(&self) -> Result<&T, InvalidState> {
        match &self.state {
            State::Resolved(Some(payload)) => Ok(payload),
            _ => Err(InvalidState),
        }
    }

    /// Take the payload out, consuming the wrapper. Same contract as
    /// [`EventualCheckedOptional::value`].
    pub fn into_value(self) -> Result<T, InvalidState> {
        match self.state {
            State::Resolved(Some(payload)) => Ok(payload),
            _ => Err(InvalidState),
        }
    }
}

impl<T> Default for EventualCheckedOptional<T>
where
    T: Value,
{
    fn default() -> Self {
        Self::PENDING
    }
}

impl<T> From<Option<T>> for EventualCheckedOptional<T>
where
    T: Value,
{
    fn from(payload: Option<T>) -> Self {
        Self::new(payload)
    }
}

impl<T> From<T> for EventualCheckedOptional<T>
where
    T: Value,
{
    fn from(payload: T) -> Self {
        Self::new(Some(payload))
    }
}

/// Compares against a raw payload as if it had been wrapped first. An
/// unresolved instance equals no raw value; see the note on the two-state
/// wrapper about the missing bare-`T`-on-the-left mirror impl.
impl<T> PartialEq<T> for EventualCheckedOptional<T>
where
    T: Value,
{
    fn eq(&self, other: &T) -> bool {
        match &self.state {
            State::Resolved(Some(payload)) => payload == other,
            _ => false,
        }
    }
}

/// Wrapping a raw `None` resolves it, so `NO_VALUE == None` holds while
/// `PENDING == None` does not.
impl<T> PartialEq<Option<T>> for EventualCheckedOptional<T>
where
    T: Value,
{
    fn eq(&self, other: &Option<T>) -> bool {
        match &self.state {
            State::Resolved(payload) => payload == other,
            State::Pending => false,
        }
    }
}

impl<T> PartialEq<EventualCheckedOptional<T>> for Option<T>
where
    T: Value,
{
    fn eq(&self, other: &EventualCheckedOptional<T>) -> bool {
        other == self
    }
}

// Resolution flag, presence flag and payload each go into the hash once.
// Instances in the same presence and resolution state hash alike.
impl<T> Hash for EventualCheckedOptional<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.state {
            State::Pending => {
                false.hash(state);
                false.hash(state);
            }
            State::Resolved(payload) => {
                true.hash(state);
                payload.is_some().hash(state);
                if let Some(payload) = payload {
                    payload.hash(state);
                }
            }
        }
    }
}

/// Renders the payload exactly as the payload type would render itself, and
/// nothing at all when unresolved or absent.
impl<T> fmt::Display for EventualCheckedOptional<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Resolved(Some(payload)) => payload.fmt(f),
            _ => Ok(()),
        }
    }
}
