use crate::simd::{
    avx512::i64x8::{self, I64x8},
    scalar,
    traits::SimdVec,
};

/// In-place `dst[i] += src[i]`, eight lanes per `vpaddq zmm`.
///
/// # Safety
///
/// The CPU must support AVX-512F.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
#[target_feature(enable = "avx512f")]
pub unsafe fn add_assign(dst: &mut [i64], src: &[i64]) {
    assert_eq!(dst.len(), src.len(), "Vectors must be the same length");

    let size = dst.len();

    let step = i64x8::LANE_COUNT;

    let nb_lanes = size - (size % step);

    let dst_ptr = dst.as_mut_ptr();
    let src_ptr = src.as_ptr();

    for i in (0..nb_lanes).step_by(step) {
        // SAFETY: i + step <= nb_lanes <= size for both slices.
        unsafe {
            let dst_chunk = I64x8::load_unaligned(dst_ptr.add(i));
            let src_chunk = I64x8::load_unaligned(src_ptr.add(i));
            let sum = dst_chunk.add(src_chunk);
            sum.store_unaligned(dst_ptr.add(i));
        }
    }

    scalar::add_assign(&mut dst[nb_lanes..], &src[nb_lanes..]);
}
