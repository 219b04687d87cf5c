//! AVX2 kernels for 256-bit vector operations.
//!
//! AVX2 is available on Intel processors since Haswell (2013) and AMD processors
//! since Excavator (2015). It is never assumed at compile time: the
//! [`Vector256`](crate::simd::SimdLevel::Vector256) level is only selected after
//! `is_x86_feature_detected!("avx2")` succeeds on the running CPU.
//!
//! # Available Types
//!
//! - [`i64x4::I64x4`]: 256-bit register holding 4 × `i64`

pub mod add;

pub mod i64x4;
