use crate::simd::{
    scalar,
    sse2::i64x2::{self, I64x2},
    traits::SimdVec,
};

/// In-place `dst[i] += src[i]`, two lanes per `paddq`.
///
/// # Safety
///
/// The CPU must support SSE2.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
#[target_feature(enable = "sse2")]
pub unsafe fn add_assign(dst: &mut [i64], src: &[i64]) {
    assert_eq!(dst.len(), src.len(), "Vectors must be the same length");

    let step = i64x2::LANE_COUNT;

    let mut dst_chunks = dst.chunks_exact_mut(step);
    let mut src_chunks = src.chunks_exact(step);

    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        // SAFETY: chunks_exact yields exactly `step` elements.
        unsafe {
            let sum = I64x2::load_unaligned(d.as_ptr()).add(I64x2::load_unaligned(s.as_ptr()));
            sum.store_unaligned(d.as_mut_ptr());
        }
    }

    scalar::add_assign(dst_chunks.into_remainder(), src_chunks.remainder());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse2_add_assign_matches_scalar() {
        if !is_x86_feature_detected!("sse2") {
            return;
        }

        for size in 0..=8 {
            let mut dst: Vec<i64> = (0..size as i64).map(|i| i * i - 10).collect();
            let src: Vec<i64> = (0..size as i64).map(|i| -3 * i).collect();

            let mut expected = dst.clone();
            scalar::add_assign(&mut expected, &src);

            unsafe { add_assign(&mut dst, &src) };

            assert_eq!(dst, expected, "size {size}");
        }
    }
}
