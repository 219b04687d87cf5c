use crate::simd::avx2::i64x4::{self, I64x4};
use crate::simd::{scalar, traits::SimdVec};

/// In-place `dst[i] += src[i]`, four lanes per `vpaddq`.
///
/// # Safety
///
/// The CPU must support AVX2.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
#[target_feature(enable = "avx2")]
pub unsafe fn add_assign(dst: &mut [i64], src: &[i64]) {
    assert_eq!(dst.len(), src.len(), "Vectors must be the same length");

    let size = dst.len();

    let nb_lanes = size - (size % i64x4::LANE_COUNT);

    for (idx, dst_chunk) in dst[..nb_lanes]
        .chunks_exact_mut(i64x4::LANE_COUNT)
        .enumerate()
    {
        let i = idx * i64x4::LANE_COUNT;

        unsafe {
            let sum = I64x4::load_unaligned(dst_chunk.as_ptr())
                .add(I64x4::load_unaligned(src[i..].as_ptr()));

            sum.store_unaligned(dst_chunk.as_mut_ptr());
        }
    }

    scalar::add_assign(&mut dst[nb_lanes..], &src[nb_lanes..]);
}
