#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::SimdVec;

/// The number of i64 lanes in an AVX2 vector.
pub const LANE_COUNT: usize = 4;

/// A 4-lane, 64-bit integer SIMD vector using AVX2 intrinsics.
///
/// Loads and stores always use the unaligned forms (`vmovdqu`).
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct I64x4 {
    elements: __m256i,
}

impl SimdVec<i64> for I64x4 {
    const LANE_COUNT: usize = LANE_COUNT;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn splat(value: i64) -> Self {
        Self {
            elements: _mm256_set1_epi64x(value),
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load_unaligned(ptr: *const i64) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: unsafe { _mm256_loadu_si256(ptr as *const __m256i) },
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store_unaligned(&self, ptr: *mut i64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        unsafe { _mm256_storeu_si256(ptr as *mut __m256i, self.elements) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn add(self, rhs: Self) -> Self {
        Self {
            elements: _mm256_add_epi64(self.elements, rhs.elements),
        }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn to_vec(self) -> Vec<i64> {
        let mut vec = vec![0i64; LANE_COUNT];

        unsafe { self.store_unaligned(vec.as_mut_ptr()) };

        vec
    }
}
