//! The `Opt<T>` container
//!
//! An `Opt<T>` either holds a value (`Some`) or holds nothing (`None`).
//! Treat it like a pointer: `unwrap()` is the dereference and panics when
//! there is nothing behind it. Use `unwrap_or`, `unwrap_or_zero` or
//! `try_unwrap` when absence is an expected state.
//!
//! Instances are immutable once built. The default value is `None`.

use std::any::type_name;

/// An optional value. Every `Opt` either has something or has nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opt<T> {
    Some(T),
    None,
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::None
    }
}

impl<T> Opt<T> {
    /// Constructs an `Opt` holding no value.
    pub const fn none() -> Self {
        Opt::None
    }

    /// Constructs an `Opt` holding `value`.
    pub const fn some(value: T) -> Self {
        Opt::Some(value)
    }

    /// Returns true if a value is present, in which case `unwrap()` will not panic.
    pub const fn is_some(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// Returns true if no value is present, in which case `unwrap()` panics.
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if there is no value. Only call this where presence has already
    /// been established; otherwise reach for [`Opt::unwrap_or`] or
    /// [`Opt::try_unwrap`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => panic!("{}::unwrap: no value to unwrap", type_name::<Self>()),
        }
    }

    /// Returns the contained value, or `fallback` if there is none.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => fallback,
        }
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Default> Opt<T> {
    /// Returns the contained value, or `T::default()` if there is none.
    pub fn unwrap_or_zero(self) -> T {
        self.unwrap_or_default_value()
    }

    /// Returns the value paired with `true` if present, or `T::default()`
    /// paired with `false` if not.
    pub fn try_unwrap(self) -> (T, bool) {
        let present = self.is_some();
        (self.unwrap_or_default_value(), present)
    }

    fn unwrap_or_default_value(self) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => T::default(),
        }
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Opt::Some(value),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(value) => Some(value),
            Opt::None => None,
        }
    }
}
