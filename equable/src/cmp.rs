//! The capability trait: one canonical comparison per subject type, with
//! every derived operation defined in terms of it.

use core::ops::Deref;

/// A type that supplies one canonical equality comparison.
///
/// Implementing this trait is the entire contract a subject type has to
/// meet: a pure, side-effect-free [`equals`](EqualityComparable::equals)
/// predicate over two values of the type. Everything else — the `==`/`!=`
/// operators (see [`impl_equality`](crate::impl_equality) and
/// [`derive(Equality)`](crate::Equality)), shared-handle comparison, the
/// [`PtrsEqual`](crate::shared::PtrsEqual) comparator — is derived from it
/// and cannot diverge from it.
///
/// ```
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
/// assert!(Point { v: 5 }.equals(&Point { v: 5 }));
/// assert!(!Point { v: 5 }.equals(&Point { v: 6 }));
/// ```
#[diagnostic::on_unimplemented(
    message = "the type `{Self}` does not supply the canonical comparison `equals(&self, &{Self}) -> bool`",
    label = "`{Self}` is not `EqualityComparable`",
    note = "implement `EqualityComparable` for `{Self}` before granting it equality operations"
)]
pub trait EqualityComparable {
    /// The canonical comparison. Every operation granted by this crate
    /// delegates here.
    #[must_use = "Comparison Operations are generally free from side effects"]
    fn equals(&self, other: &Self) -> bool;

    /// Compares `self` against a possibly-absent shared handle.
    ///
    /// `None` compares unequal to any present `self`, unconditionally. Note
    /// the asymmetry: the receiver is always present, so no "absent equals
    /// absent" rule exists or is implied. A present handle is dereferenced
    /// and compared with [`equals`](EqualityComparable::equals).
    ///
    /// The handle may be any [`Deref`] handle to the subject type: `Arc`,
    /// `Rc`, `Box`, or a plain reference.
    #[must_use = "Comparison Operations are generally free from side effects"]
    fn equals_shared<P>(&self, other: Option<&P>) -> bool
    where
        P: Deref<Target = Self>,
    {
        match other {
            Some(other) => self.equals(&**other),
            None => false,
        }
    }
}

/// Comparison taking extra named parameters, for subject types whose
/// equality is configurable (tolerances, mode switches).
///
/// `Opts` is any parameter type the subject chooses;
/// [`EqualOptions`](crate::options::EqualOptions) is a ready-made one. A
/// subject may implement `EqualsWith` for several parameter types, and each
/// gains the shared-handle form with the same absent-compares-unequal policy
/// as [`EqualityComparable::equals_shared`].
pub trait EqualsWith<Opts>: EqualityComparable {
    /// The parameterized comparison.
    #[must_use = "Comparison Operations are generally free from side effects"]
    fn equals_with(&self, other: &Self, opts: Opts) -> bool;

    /// Compares `self` against a possibly-absent shared handle, forwarding
    /// `opts` to [`equals_with`](EqualsWith::equals_with) when the handle is
    /// present. `None` compares unequal, unconditionally.
    #[must_use = "Comparison Operations are generally free from side effects"]
    fn equals_shared_with<P>(&self, other: Option<&P>, opts: Opts) -> bool
    where
        P: Deref<Target = Self>,
    {
        match other {
            Some(other) => self.equals_with(&**other, opts),
            None => false,
        }
    }
}
