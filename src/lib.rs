//! In-place SIMD addition of `i64` slices.
//!
//! `dst[i] += src[i]` for every index, processed `W` lanes at a time with
//! hardware vector registers and a scalar pass over the trailing
//! `len % W` elements. Arithmetic wraps on overflow on every path.
//!
//! The kernel is picked once per process from what the CPU supports:
//!
//! | Level       | aarch64 | x86 / x86_64 | W |
//! |-------------|---------|--------------|---|
//! | `Scalar`    | yes     | yes          | 1 |
//! | `Vector128` | NEON    | SSE2         | 2 |
//! | `Vector256` |         | AVX2         | 4 |
//! | `Vector512` |         | AVX-512F     | 8 |
//!
//! ```
//! use simdadd::SimdAddAssign;
//!
//! let mut a = vec![i64::MAX, 2, 3];
//! let b = vec![1i64, 20, 30];
//!
//! a.simd_add_assign(&b);
//!
//! assert_eq!(a, [i64::MIN, 22, 33]);
//! ```

pub mod error;
pub mod ffi;
pub mod simd;

pub use error::{Result, SimdAddError};
pub use simd::{
    add_in_place, add_in_place_with, lane_count, scalar_add_in_place, simd_level,
    try_add_in_place, SimdAddAssign, SimdLevel,
};
