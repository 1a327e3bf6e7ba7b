//! Operator grants for concrete subject types.

/// Grants the `==`/`!=` operators to each listed type, defined by its
/// canonical [`EqualityComparable::equals`](crate::EqualityComparable::equals).
///
/// Only `PartialEq::eq` is emitted; `ne` is left to the default negation so
/// the two operators can never diverge. The grant also asserts the contract
/// at build time, whether or not any comparison is ever written.
///
/// ```
/// use equable::{impl_equality, EqualityComparable};
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
/// impl_equality!(Point);
///
/// assert!(Point { v: 5 } == Point { v: 5 });
/// assert!(Point { v: 5 } != Point { v: 6 });
/// ```
///
/// A type that does not supply the canonical comparison fails to build even
/// if the operators go unused:
///
/// ```compile_fail,E0277
/// struct Opaque;
///
/// equable::impl_equality!(Opaque);
/// ```
///
/// For generic subject types, use [`derive(Equality)`](crate::Equality)
/// instead.
#[macro_export]
macro_rules! impl_equality {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $ty {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    $crate::EqualityComparable::equals(self, other)
                }
                // `ne` is deliberately not implemented
            }

            const _: () = {
                const fn __equable_contract<T: $crate::EqualityComparable + ?Sized>() {}
                __equable_contract::<$ty>()
            };
        )*
    };
}

#[cfg(test)]
mod test {
    use crate::{Equality, EqualityComparable};

    struct Point {
        v: i32,
    }

    impl EqualityComparable for Point {
        fn equals(&self, other: &Self) -> bool {
            self.v == other.v
        }
    }

    impl_equality!(Point);

    #[test]
    fn operators_follow_equals() {
        let a = Point { v: 5 };
        let b = Point { v: 5 };
        assert_eq!(a == b, a.equals(&b));
        assert!(a == b);
        assert!(!(a != b));
    }

    #[test]
    fn operators_never_diverge() {
        let a = Point { v: 5 };
        let c = Point { v: 6 };
        assert!(!a.equals(&c));
        assert!(!(a == c));
        assert!(a != c);
    }

    #[test]
    fn grant_covers_a_type_list() {
        struct Tag(u8);
        struct Mark(u8);

        impl EqualityComparable for Tag {
            fn equals(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl EqualityComparable for Mark {
            fn equals(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl_equality!(Tag, Mark);

        assert!(Tag(1) == Tag(1));
        assert!(Tag(1) != Tag(2));
        assert!(Mark(3) == Mark(3));
    }

    #[test]
    fn derive_grants_a_concrete_type() {
        #[derive(Equality)]
        struct Badge(u8);

        impl EqualityComparable for Badge {
            fn equals(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        assert!(Badge(1) == Badge(1));
        assert!(Badge(1) != Badge(2));
    }

    #[test]
    fn derive_grants_a_generic_type() {
        #[derive(Equality)]
        struct Holder<T> {
            inner: T,
        }

        impl<T: PartialEq> EqualityComparable for Holder<T> {
            fn equals(&self, other: &Self) -> bool {
                self.inner == other.inner
            }
        }

        assert!(Holder { inner: "a" } == Holder { inner: "a" });
        assert!(Holder { inner: 1 } != Holder { inner: 2 });
        assert_eq!(
            Holder { inner: 4 } == Holder { inner: 4 },
            Holder { inner: 4 }.equals(&Holder { inner: 4 })
        );
    }
}
