use std::arch::aarch64::*;

use crate::simd::traits::SimdVec;

pub const LANE_COUNT: usize = 2;

/// A SIMD vector of 2 64-bit signed integers
#[derive(Copy, Clone, Debug)]
pub struct I64x2 {
    elements: int64x2_t,
}

impl SimdVec<i64> for I64x2 {
    const LANE_COUNT: usize = LANE_COUNT;

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn splat(value: i64) -> Self {
        Self {
            elements: vdupq_n_s64(value),
        }
    }

    /// `vld1q_s64` only needs element alignment, so every `i64` pointer works.
    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn load_unaligned(ptr: *const i64) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: unsafe { vld1q_s64(ptr) },
        }
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn store_unaligned(&self, ptr: *mut i64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        unsafe { vst1q_s64(ptr, self.elements) }
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn add(self, rhs: Self) -> Self {
        Self {
            elements: vaddq_s64(self.elements, rhs.elements),
        }
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn to_vec(self) -> Vec<i64> {
        let mut vec = vec![0i64; LANE_COUNT];

        unsafe { self.store_unaligned(vec.as_mut_ptr()) };

        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_add_store() {
        let a = [3i64, -4];
        let b = [10i64, 10];
        let mut out = [0i64; LANE_COUNT];

        unsafe {
            let sum = I64x2::load_unaligned(a.as_ptr()).add(I64x2::load_unaligned(b.as_ptr()));
            sum.store_unaligned(out.as_mut_ptr());
        }

        assert_eq!(out, [13, 6]);
    }

    #[test]
    fn test_add_wraps_per_lane() {
        let lanes = unsafe {
            I64x2::splat(i64::MAX)
                .add(I64x2::splat(1))
                .to_vec()
        };

        assert_eq!(lanes, vec![i64::MIN; LANE_COUNT]);
    }
}
