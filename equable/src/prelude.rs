/// The first version prelude of `equable`
pub mod v1 {
    pub use crate::cmp::{EqualityComparable, EqualsWith};
    pub use crate::options::{CompareMode, EqualOptions};
    pub use crate::shared::PtrsEqual;
    pub use crate::Equality;

    pub use crate::impl_equality;
}
