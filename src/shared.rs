use by_address::ByAddress;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

/// A cheap-clone reference to a payload, compared by identity.
///
/// The wrapper types require their payloads to be cloneable and comparable.
/// Many useful payloads are neither, or are expensive at both; putting one
/// behind `Shared` makes cloning an `Arc` bump and equality a pointer
/// comparison, at the cost that two separately-built referents holding equal
/// data count as different payloads. Clones of one `Shared` alias the same
/// referent and always compare equal.
#[derive(Debug, Default)]
#[repr(transparent)]
pub struct Shared<T> {
    referent: ByAddress<Arc<T>>,
}

impl<T> Shared<T> {
    #[inline]
    pub fn new(referent: T) -> Self {
        Self {
            referent: ByAddress(Arc::new(referent)),
        }
    }
}

impl<T> From<T> for Shared<T> {
    #[inline]
    fn from(referent: T) -> Self {
        Self::new(referent)
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.referent.deref()
    }
}

impl<T> AsRef<T> for Shared<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.referent.as_ref()
    }
}

// The derived impls would demand the same capability of T, which is the one
// thing Shared exists to avoid. Everything below delegates to the address.
impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            referent: self.referent.clone(),
        }
    }
}

impl<T> PartialEq for Shared<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.referent == other.referent
    }
}

impl<T> Eq for Shared<T> {}

impl<T> PartialOrd for Shared<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.referent.partial_cmp(&other.referent)
    }
}

impl<T> Ord for Shared<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.referent.cmp(&other.referent)
    }
}

impl<T> Hash for Shared<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.referent.hash(state)
    }
}

impl<T> fmt::Display for Shared<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.referent.fmt(f)
    }
}
