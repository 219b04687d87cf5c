//! SSE2 kernels for 128-bit vector operations on x86 / x86_64.
//!
//! SSE2 is the x86_64 baseline, so this is the [`Vector128`](crate::simd::SimdLevel::Vector128)
//! implementation for Intel and AMD targets, and the floor under AVX2 / AVX-512.

pub mod add;

pub mod i64x2;
