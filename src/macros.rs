//! the variadic entry points. each macro exists twice, once per side of
//! the `checked_bounds` feature: the checked definition dispatches through
//! the bounded builder traits so a bad argument is reported against the
//! bound it fails, the other expands to bare conversion expressions and
//! lets the conversion itself refuse to compile. which side is active is
//! what [`probe::constraint_checking_available`](crate::probe::constraint_checking_available)
//! reports.

/// counts macro arguments, for inferring the array length. not public api.
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:expr $(, $rest:expr)*) => { 1usize + $crate::__count!($($rest),*) };
}

/// builds a fixed length array by implicit conversion, `arr![T; v0, v1, ...]`.
///
/// the length is the number of values supplied; every value must be
/// `Into<T>`. slot order is argument order.
///
/// ```
/// use array_build::arr;
///
/// assert_eq!(arr![i32; 1, 2, 3], [1, 2, 3]);
/// assert_eq!(arr![f64; 1u8, 2u16, 3.5f32], [1.0, 2.0, 3.5]);
///
/// let none: [u8; 0] = arr![u8;];
/// assert_eq!(none.len(), 0);
/// ```
///
/// a narrowing argument is not an implicit conversion and is refused;
/// [`arr_cast!`] accepts the identical call:
///
/// ```compile_fail
/// let seq = array_build::arr![f32; 1, 2, 3.5f64];
/// ```
#[cfg(feature = "checked_bounds")]
#[macro_export]
macro_rules! arr {
    ($t:ty; $($x:expr),* $(,)?) => {
        $crate::IntoArray::<$t, { $crate::__count!($($x),*) }>::into_array(($($x,)*))
    };
}

/// builds a fixed length array by explicit cast, `arr_cast![T; v0, v1, ...]`.
///
/// same shape as [`arr!`], but every value goes through an unconditional
/// cast to `T`, so narrowing and precision loss are allowed on purpose:
///
/// ```
/// use array_build::arr_cast;
///
/// let seq = arr_cast![f32; 1, 2, 3.5f64];
/// assert_eq!(seq, [1.0, 2.0, 3.5]);
/// ```
#[cfg(feature = "checked_bounds")]
#[macro_export]
macro_rules! arr_cast {
    ($t:ty; $($x:expr),* $(,)?) => {
        $crate::CastArray::<$t, { $crate::__count!($($x),*) }>::cast_array(($($x,)*))
    };
}

/// builds a fixed length array by default initializing it and assigning
/// each converted value into the next slot, `arr_assign![T; v0, v1, ...]`.
///
/// needs `T: Default` on top of the per value `Into<T>` conversions. the
/// assignments are an explicit statement sequence over a cursor, so the
/// slot order is the argument order by construction:
///
/// ```
/// use array_build::arr_assign;
///
/// let names = arr_assign![String; "foo", "bar", "baz"];
/// assert_eq!(names, ["foo", "bar", "baz"]);
/// ```
#[cfg(feature = "checked_bounds")]
#[macro_export]
macro_rules! arr_assign {
    ($t:ty; $($x:expr),* $(,)?) => {
        $crate::AssignArray::<$t, { $crate::__count!($($x),*) }>::assign_array(($($x,)*))
    };
}

// unchecked definitions. same surface and the same rejections, but the
// errors come out of the expanded conversion expressions.

#[cfg(not(feature = "checked_bounds"))]
#[macro_export]
macro_rules! arr {
    ($t:ty; $($x:expr),* $(,)?) => {{
        let seq: [$t; $crate::__count!($($x),*)] = [$(::core::convert::Into::into($x)),*];
        seq
    }};
}

#[cfg(not(feature = "checked_bounds"))]
#[macro_export]
macro_rules! arr_cast {
    ($t:ty; $($x:expr),* $(,)?) => {{
        let seq: [$t; $crate::__count!($($x),*)] = [$(($x as $t)),*];
        seq
    }};
}

#[cfg(not(feature = "checked_bounds"))]
#[macro_export]
macro_rules! arr_assign {
    ($t:ty;) => {
        $crate::builder::SlotWriter::<$t, 0>::new().finish()
    };
    ($t:ty; $($x:expr),+ $(,)?) => {{
        let mut slots = $crate::builder::SlotWriter::<$t, { $crate::__count!($($x),+) }>::new();
        $(slots.put(::core::convert::Into::into($x));)+
        slots.finish()
    }};
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    #[test]
    fn count_is_exact() {
        assert_eq!(crate::__count!(), 0);
        assert_eq!(crate::__count!(1), 1);
        assert_eq!(crate::__count!(1, 2, 3), 3);
    }

    #[test]
    fn length_matches_argument_count() {
        assert_eq!(arr![u32;].len(), 0);
        assert_eq!(arr![u32; 9u32].len(), 1);
        assert_eq!(arr![u32; 1u8, 2u16, 3u32].len(), 3);
    }

    #[test]
    fn direct_keeps_values_and_order() {
        assert_eq!(arr![i32; 1, 2, 3], [1, 2, 3]);
    }

    #[test]
    fn cast_narrows() {
        assert_eq!(arr_cast![f32; 1, 2, 3.5f64], [1.0f32, 2.0, 3.5]);
    }

    #[test]
    fn assign_fills_left_to_right() {
        let names = arr_assign![String; "foo", "bar", "baz"];
        assert_eq!(names, ["foo", "bar", "baz"]);
    }

    #[test]
    fn assign_of_nothing_is_empty() {
        let empty = arr_assign![String;];
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn trailing_comma_is_accepted() {
        assert_eq!(arr![u8; 1u8, 2u8,], [1, 2]);
        assert_eq!(arr_cast![u8; 1u8, 2u8,], [1, 2]);
        assert_eq!(arr_assign![u8; 1u8, 2u8,], [1, 2]);
    }

    #[test]
    fn policies_agree_where_all_apply() {
        assert_eq!(arr![i64; 1u8, 2i8, 3u16], arr_assign![i64; 1u8, 2i8, 3u16]);
        assert_eq!(arr![i64; 1u8, 2i8, 3u16], arr_cast![i64; 1u8, 2i8, 3u16]);
    }

    #[test]
    fn repeated_expansion_is_equal() {
        assert_eq!(arr![f64; 1, 2.5f32], arr![f64; 1, 2.5f32]);
    }
}
