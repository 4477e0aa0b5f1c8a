/// reports whether the variadic macros route their arguments through the
/// bound checked builder traits.
///
/// with the `checked_bounds` feature enabled (the default) every argument
/// type is validated against the element type before anything is built, so
/// a bad argument is reported against the trait bound it fails. with the
/// feature disabled the macros expand to bare conversion expressions
/// instead; the same misuse still refuses to compile, the error just
/// points at the expanded conversion rather than at a named constraint.
///
/// usable in `const` context, never fails, conservatively `false` when
/// the feature is off.
pub const fn constraint_checking_available() -> bool {
    cfg!(feature = "checked_bounds")
}
