//! Zero-value classification for the slots of a multi-value result.
//!
//! Every slot of a result is either *empty* (the zero value of its type) or
//! *non-empty*. Rust has no reflection to build "the default value of this
//! runtime type", so each type declares the answer itself through
//! [`ZeroValue`].

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Tells whether a value is the zero value of its own type.
///
/// `Option::None` is the Rust spelling of a nil slot. Structural types are
/// zero when all of their parts are zero; pointer-like owners (`Box`, `Rc`,
/// `Arc`, references) are never null and delegate to the pointee.
pub trait ZeroValue {
    /// Returns `true` when `self` equals the zero value of its type.
    fn is_zero(&self) -> bool;
}

/// Object-safe view of a single slot, used by the validity check.
pub trait Value: Debug {
    /// Same answer as [`ZeroValue::is_zero`] for the underlying type.
    fn is_zero_value(&self) -> bool;

    /// Name of the slot's type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: ZeroValue + Debug> Value for T {
    fn is_zero_value(&self) -> bool {
        ZeroValue::is_zero(self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Implements [`ZeroValue`] for types whose zero value is their `Default`.
///
/// The comparison is structural (`PartialEq`) against `Default::default()`.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// errxpect::impl_zero_value!(Point);
///
/// use errxpect::ZeroValue;
/// assert!(Point::default().is_zero());
/// assert!(!Point { x: 1, y: 0 }.is_zero());
/// ```
#[macro_export]
macro_rules! impl_zero_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ZeroValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }
            }
        )+
    };
}

macro_rules! impl_numeric {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl ZeroValue for $ty {
                #[allow(clippy::float_cmp)]
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl ZeroValue for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl ZeroValue for () {
    fn is_zero(&self) -> bool {
        true
    }
}

impl<T: ?Sized> ZeroValue for PhantomData<T> {
    fn is_zero(&self) -> bool {
        true
    }
}

impl ZeroValue for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

macro_rules! impl_is_empty {
    ($($ty:ty),+) => {
        $(
            impl ZeroValue for $ty {
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_is_empty!(str, String, OsStr, OsString);

impl ZeroValue for Path {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl ZeroValue for PathBuf {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl ZeroValue for Cow<'_, str> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> ZeroValue for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for VecDeque<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> ZeroValue for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> ZeroValue for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> ZeroValue for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ZeroValue, const N: usize> ZeroValue for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(ZeroValue::is_zero)
    }
}

macro_rules! impl_deref {
    ($($ptr:ty),+) => {
        $(
            impl<T: ZeroValue + ?Sized> ZeroValue for $ptr {
                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }
            }
        )+
    };
}

impl_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// An error value signals a failure no matter what it carries.
impl ZeroValue for std::io::Error {
    fn is_zero(&self) -> bool {
        false
    }
}

impl ZeroValue for std::fmt::Error {
    fn is_zero(&self) -> bool {
        false
    }
}

impl ZeroValue for dyn Error {
    fn is_zero(&self) -> bool {
        false
    }
}

impl ZeroValue for dyn Error + Send + Sync {
    fn is_zero(&self) -> bool {
        false
    }
}

macro_rules! impl_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: ZeroValue),+> ZeroValue for ($($ty,)+) {
            #[allow(non_snake_case)]
            fn is_zero(&self) -> bool {
                let ($($ty,)+) = self;
                true $(&& $ty.is_zero())+
            }
        }
    };
}

impl_tuple!(T1);
impl_tuple!(T1, T2);
impl_tuple!(T1, T2, T3);
impl_tuple!(T1, T2, T3, T4);
impl_tuple!(T1, T2, T3, T4, T5);
impl_tuple!(T1, T2, T3, T4, T5, T6);
impl_tuple!(T1, T2, T3, T4, T5, T6, T7);
impl_tuple!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
