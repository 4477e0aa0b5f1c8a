//! builders for fixed length arrays where the length is taken from the
//! number of values supplied, not from an annotation. each value may have
//! its own type as long as it converts to the element type.
//!
//! ```
//! use array_build::arr;
//!
//! let seq: [f32; 3] = arr![f32; 1u8, 2i8, 3.0f32];
//! assert_eq!(seq, [1.0, 2.0, 3.0]);
//! ```
//!
//! three policies cover the usual conversion trade offs: [`arr!`] converts
//! implicitly via [`Into`] and refuses anything lossy, [`arr_cast!`] casts
//! unconditionally the way `as` does, and [`arr_assign!`] default
//! initializes the array first and then assigns slot by slot, for element
//! types where assignment is the natural way in. the same policies are
//! reachable as traits on tuples, see [`IntoArray`], [`CastArray`] and
//! [`AssignArray`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

pub mod builder;
pub mod cast;
pub mod probe;

mod macros;

pub use builder::{AssignArray, CastArray, IntoArray};
pub use cast::CastTo;
