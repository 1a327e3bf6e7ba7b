#![allow(clippy::module_name_repetitions)]
#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]
//! Opt-in equality capability for value types.
//!
//! A subject type supplies one canonical comparison,
//! [`EqualityComparable::equals`], and gains from it:
//! * the `==`/`!=` operators, via the [`impl_equality`] macro for concrete
//!   types or [`derive(Equality)`](Equality) for generic ones,
//! * comparison against possibly-absent shared handles
//!   ([`EqualityComparable::equals_shared`]),
//! * a stateless comparator for containers of shared handles
//!   ([`PtrsEqual`](shared::PtrsEqual)).
//!
//! Every granted operation delegates to `equals`; none of them can diverge
//! from it. A type that claims a grant without supplying `equals` fails to
//! build, whether or not any comparison is ever written.
//!
//! # Examples
//!
//! Granting a generic subject type the operators:
//!
//! ```
//! use equable::{Equality, EqualityComparable};
//!
//! #[derive(Equality)]
//! struct Holder<T> {
//!     inner: T,
//! }
//!
//! impl<T: PartialEq> EqualityComparable for Holder<T> {
//!     fn equals(&self, other: &Self) -> bool {
//!         self.inner == other.inner
//!     }
//! }
//!
//! assert!(Holder { inner: 5 } == Holder { inner: 5 });
//! assert!(Holder { inner: 5 } != Holder { inner: 6 });
//! ```
//!
//! A subject that never supplies `equals` does not build, even with the
//! operators unused:
//!
//! ```compile_fail,E0277
//! #[derive(equable::Equality)]
//! struct Opaque(u8);
//! ```

#[cfg(test)]
extern crate self as equable;

pub mod cmp;
mod macros;
pub mod options;
pub mod prelude;
pub mod shared;

pub use cmp::{EqualityComparable, EqualsWith};
pub use equable_macro::Equality;
