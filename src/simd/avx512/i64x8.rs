#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::SimdVec;

/// The number of i64 lanes in an AVX-512 vector.
pub const LANE_COUNT: usize = 8;

/// An 8-lane, 64-bit integer SIMD vector using AVX-512F intrinsics.
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct I64x8 {
    elements: __m512i,
}

impl SimdVec<i64> for I64x8 {
    const LANE_COUNT: usize = LANE_COUNT;

    #[inline]
    #[target_feature(enable = "avx512f")]
    unsafe fn splat(value: i64) -> Self {
        Self {
            elements: _mm512_set1_epi64(value),
        }
    }

    #[inline]
    #[target_feature(enable = "avx512f")]
    unsafe fn load_unaligned(ptr: *const i64) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: unsafe { _mm512_loadu_epi64(ptr) },
        }
    }

    #[inline]
    #[target_feature(enable = "avx512f")]
    unsafe fn store_unaligned(&self, ptr: *mut i64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        unsafe { _mm512_storeu_epi64(ptr, self.elements) }
    }

    #[inline]
    #[target_feature(enable = "avx512f")]
    unsafe fn add(self, rhs: Self) -> Self {
        Self {
            elements: _mm512_add_epi64(self.elements, rhs.elements),
        }
    }

    #[inline]
    #[target_feature(enable = "avx512f")]
    unsafe fn to_vec(self) -> Vec<i64> {
        let mut vec = vec![0i64; LANE_COUNT];

        unsafe { self.store_unaligned(vec.as_mut_ptr()) };

        vec
    }
}
