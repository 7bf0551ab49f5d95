//! Comparison of individual elements against zero.
//!
//! The [`IsZero`] trait is the only thing the checker needs from an element
//! type. It is implemented for every primitive integer, for `bool` (which a
//! Python caller can hand over as an `int`), and for [`Int`], the value type
//! dynamic sources convert their elements into.

/// Equality test against integer zero
pub trait IsZero {
    /// Returns true if the value equals zero
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsZero for $ty {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_is_zero_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IsZero for bool {
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    #[inline]
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

/// An integer of arbitrary magnitude, reduced to what a zero test needs.
///
/// Values that fit in an `i64` are kept as-is. Anything wider is recorded only
/// by sign, since a value outside the `i64` range cannot be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Int {
    /// Value within the `i64` range
    Small(i64),
    /// Value outside the `i64` range
    Big {
        /// True if the value is below `i64::MIN`
        negative: bool,
    },
}

impl Int {
    /// The integer zero
    pub const ZERO: Int = Int::Small(0);

    /// Returns the value if it fits in an `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Int::Small(value) => Some(value),
            Int::Big { .. } => None,
        }
    }
}

impl IsZero for Int {
    #[inline]
    fn is_zero(&self) -> bool {
        matches!(self, Int::Small(0))
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Int::Small(value)
    }
}

impl From<bool> for Int {
    fn from(value: bool) -> Self {
        Int::Small(i64::from(value))
    }
}

impl From<i128> for Int {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(small) => Int::Small(small),
            Err(_) => Int::Big {
                negative: value < 0,
            },
        }
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(small) => Int::Small(small),
            Err(_) => Int::Big { negative: false },
        }
    }
}
