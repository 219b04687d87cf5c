#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512_intrinsics))]
pub mod avx512;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod sse2;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub mod dispatch;
pub mod level;
pub mod scalar;
pub mod traits;

pub use dispatch::{add_in_place, add_in_place_with, scalar_add_in_place, try_add_in_place};
pub use level::{lane_count, simd_level, SimdLevel, MAX_LEVEL_ENV};
pub use traits::{SimdAddAssign, SimdVec};
