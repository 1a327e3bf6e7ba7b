//! Comparator for containers of shared handles.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

use crate::cmp::EqualityComparable;

/// A stateless equality predicate over shared handles to `T`.
///
/// Both operands are dereferenced and compared with the subject's canonical
/// [`equals`](EqualityComparable::equals); the handles themselves (their
/// addresses, reference counts) never participate. The operands are plain
/// [`Deref`] handles rather than optional ones, so the comparator can only
/// ever be handed present operands.
///
/// ```
/// use std::sync::Arc;
///
/// use equable::shared::PtrsEqual;
/// use equable::EqualityComparable;
///
/// struct Point {
///     v: i32,
/// }
///
/// impl EqualityComparable for Point {
///     fn equals(&self, other: &Self) -> bool {
///         self.v == other.v
///     }
/// }
///
/// let cmp = PtrsEqual::new();
/// let l = Arc::new(Point { v: 5 });
/// let r = Arc::new(Point { v: 5 });
/// assert!(cmp.equal(&l, &r));
/// assert!(!cmp.equal(&l, &Arc::new(Point { v: 6 })));
/// ```
pub struct PtrsEqual<T: ?Sized>(PhantomData<fn(&T) -> bool>);

impl<T: ?Sized> PtrsEqual<T> {
    /// Returns the comparator. Zero-size; every instance behaves
    /// identically.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: EqualityComparable + ?Sized> PtrsEqual<T> {
    /// Compares the pointees of two present handles with the subject's
    /// canonical comparison.
    #[must_use = "Comparison Operations are generally free from side effects"]
    pub fn equal<P>(&self, l: &P, r: &P) -> bool
    where
        P: Deref<Target = T>,
    {
        (**l).equals(&**r)
    }
}

impl<T: ?Sized> Clone for PtrsEqual<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Copy for PtrsEqual<T> {}

impl<T: ?Sized> Default for PtrsEqual<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for PtrsEqual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PtrsEqual")
    }
}
