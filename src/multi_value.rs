//! Multi-value results as captured from a single call.

use crate::zero::Value;

/// An ordered, fixed-length group of values returned by one call.
///
/// The last element is the *status* slot, conventionally an error-like
/// value such as `Option<E>`. Implemented for tuples of up to twelve
/// elements whose members implement [`ZeroValue`](crate::ZeroValue) and
/// `Debug`. The empty tuple is accepted so that calling code returning
/// nothing is reported instead of rejected by the compiler.
pub trait MultiValue {
    /// Type of the trailing status slot.
    type Status;

    /// All slots in order, status slot last.
    fn slots(&self) -> Vec<&dyn Value>;

    /// The trailing status slot, or `None` for an empty result.
    fn status(&self) -> Option<&Self::Status>;
}

impl MultiValue for () {
    type Status = ();

    fn slots(&self) -> Vec<&dyn Value> {
        Vec::new()
    }

    fn status(&self) -> Option<&Self::Status> {
        None
    }
}

macro_rules! impl_multi_value {
    ($($pre:ident),* => $last:ident) => {
        impl<$($pre: Value,)* $last: Value> MultiValue for ($($pre,)* $last,) {
            type Status = $last;

            #[allow(non_snake_case)]
            fn slots(&self) -> Vec<&dyn Value> {
                let ($($pre,)* $last,) = self;
                vec![$($pre as &dyn Value,)* $last as &dyn Value]
            }

            fn status(&self) -> Option<&Self::Status> {
                let (.., status) = self;
                Some(status)
            }
        }
    };
}

impl_multi_value!(=> T1);
impl_multi_value!(T1 => T2);
impl_multi_value!(T1, T2 => T3);
impl_multi_value!(T1, T2, T3 => T4);
impl_multi_value!(T1, T2, T3, T4 => T5);
impl_multi_value!(T1, T2, T3, T4, T5 => T6);
impl_multi_value!(T1, T2, T3, T4, T5, T6 => T7);
impl_multi_value!(T1, T2, T3, T4, T5, T6, T7 => T8);
impl_multi_value!(T1, T2, T3, T4, T5, T6, T7, T8 => T9);
impl_multi_value!(T1, T2, T3, T4, T5, T6, T7, T8, T9 => T10);
impl_multi_value!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10 => T11);
impl_multi_value!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11 => T12);
