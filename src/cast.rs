/// an explicit, unconditional conversion to `U`, allowed to narrow.
///
/// this is the trait face of the `as` operator: every impl between the
/// numeric primitives is exactly `self as U`, so float to int saturates,
/// wide to narrow truncates and `f64` to `f32` rounds. use it where an
/// [`Into`] bound would refuse a conversion you actually want.
///
/// not sealed. a type with its own lossy conversions may implement it and
/// participate in [`CastArray`](crate::CastArray).
pub trait CastTo<U> {
    fn cast_to(self) -> U;
}

macro_rules! impl_cast_to {
    ($dst:ty: $($src:ty),*) => {$(
        impl CastTo<$dst> for $src {
            #[inline]
            fn cast_to(self) -> $dst {
                self as $dst
            }
        }
    )*};
}

macro_rules! impl_cast_matrix {
    ($($dst:ty),*) => {$(
        impl_cast_to!($dst: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
    )*};
}

impl_cast_matrix!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
