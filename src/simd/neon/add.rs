use crate::simd::{
    neon::i64x2::{self, I64x2},
    scalar,
    traits::SimdVec,
};

/// In-place `dst[i] += src[i]`, two lanes per NEON instruction.
///
/// The first `len - len % 2` elements go through `vaddq_s64`, the trailing
/// element (if any) through the scalar kernel.
///
/// # Safety
///
/// The CPU must support NEON.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
#[target_feature(enable = "neon")]
pub unsafe fn add_assign(dst: &mut [i64], src: &[i64]) {
    assert_eq!(dst.len(), src.len(), "Vectors must be the same length");

    let size = dst.len();

    let step = i64x2::LANE_COUNT;

    let nb_lanes = size - (size % step);

    for i in (0..nb_lanes).step_by(step) {
        // SAFETY: i + step <= nb_lanes <= size for both slices.
        unsafe { add_block(dst.as_mut_ptr().add(i), src.as_ptr().add(i)) };
    }

    scalar::add_assign(&mut dst[nb_lanes..], &src[nb_lanes..]);
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn add_block(dst: *mut i64, src: *const i64) {
    // Assumes both pointers have i64x2::LANE_COUNT valid elements
    let dst_chunk = unsafe { I64x2::load_unaligned(dst) };
    let src_chunk = unsafe { I64x2::load_unaligned(src) };
    unsafe { dst_chunk.add(src_chunk).store_unaligned(dst) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_add_assign_matches_scalar() {
        for size in 0..=8 {
            let mut dst: Vec<i64> = (0..size as i64).map(|i| i * 7 - 3).collect();
            let src: Vec<i64> = (0..size as i64).map(|i| 100 - i).collect();

            let mut expected = dst.clone();
            scalar::add_assign(&mut expected, &src);

            unsafe { add_assign(&mut dst, &src) };

            assert_eq!(dst, expected, "size {size}");
        }
    }

    #[test]
    fn test_neon_add_assign_unaligned_start() {
        let mut backing = vec![1i64; 9];
        let src = vec![2i64; 8];

        // Offsetting by one element breaks 16-byte alignment
        unsafe { add_assign(&mut backing[1..], &src) };

        assert_eq!(backing[0], 1);
        assert!(backing[1..].iter().all(|&x| x == 3));
    }
}
