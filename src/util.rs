// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! General utilities

/// A trait to be implemented by types that can sometimes be converted into a `T`.
///
/// Like `TryInto` but taking `self` by reference.
pub trait TryAs<T> {
    type Error;

    /// Try to get a copy of self as a `T`.
    fn try_as(&self) -> Result<T, Self::Error>;
}

/// A trait to be implemented by types for which a `&T` can sometimes be obtained.
///
/// Unlike `std::convert::AsRef::as_ref()`, `TryAsRef::try_as_ref()` can fail.
pub trait TryAsRef<T: ?Sized> {
    type Error;

    /// Try to borrow self as a `&T`.
    fn try_as_ref(&self) -> Result<&T, Self::Error>;
}
