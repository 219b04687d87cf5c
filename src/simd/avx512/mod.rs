//! AVX-512F kernels for 512-bit vector operations.
//!
//! Only compiled when the toolchain exposes the AVX-512 intrinsics
//! (`cfg(avx512_intrinsics)`, set by `build.rs`). The
//! [`Vector512`](crate::simd::SimdLevel::Vector512) level is then selected at
//! runtime when `is_x86_feature_detected!("avx512f")` succeeds.

pub mod add;

pub mod i64x8;
