//! ARM NEON kernels for 128-bit vector operations.
//!
//! NEON is part of the AArch64 baseline, so on `aarch64` targets the
//! [`Vector128`](crate::simd::SimdLevel::Vector128) level is always available.
//! Detection still goes through `is_aarch64_feature_detected!` so the dispatch
//! logic is the same on every architecture.
//!
//! # Available Types
//!
//! - [`i64x2::I64x2`]: 128-bit register holding 2 × `i64`
//!
//! # Platform Support
//!
//! - **Apple Silicon**: M1, M2, M3 processors (macOS, iOS)
//! - **AWS Graviton**: Graviton2, Graviton3 processors
//! - **Embedded**: ARM Cortex-A series processors running AArch64

pub mod add;

pub mod i64x2;
