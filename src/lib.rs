//! Checked optional values.
//!
//! This crate provides two small wrapper types for values that may be
//! absent. Unlike a bare `Option`, the wrappers never hand out a payload
//! without the caller going through a presence check, and they carry an
//! equality contract that makes a wrapper comparable against raw payloads.
//!
//! [`CheckedOptional`] tracks two states: a value is present, or it is not.
//! [`EventualCheckedOptional`] tracks three: in addition to present and
//! absent it distinguishes *unresolved*, the state of a result slot whose
//! producer has not reported back yet. A lookup that has completed and found
//! nothing is a different observation than a lookup still in flight, and the
//! two compare as unequal.
//!
//! Both types are plain immutable values. They contain no synchronization;
//! publishing an [`EventualCheckedOptional`] from an asynchronous producer
//! to a consumer is the job of whatever channel or task handle carries it.

mod checked;
mod error;
mod eventual;
mod shared;

pub use {
    checked::{optional, CheckedOptional},
    error::InvalidState,
    eventual::{eventual, EventualCheckedOptional},
    shared::Shared,
};

/// Payload contract for both wrapper types.
///
/// Payloads are copied by value when a wrapper is cloned and take part in
/// the wrapper's equality, hence `Clone + Eq`. `Send + 'static` lets a
/// resolved slot travel from a producer task to its consumer. Types that
/// are not cheap to clone or compare can be wrapped in [`Shared`] first.
pub trait Value: 'static + Send + Clone + Eq {}
impl<T> Value for T where T: 'static + Send + Clone + Eq {}
