//! Portable scalar kernel.
//!
//! Used directly for [`SimdLevel::Scalar`](crate::simd::SimdLevel::Scalar) and as
//! the remainder pass of every vector kernel, so wrap-around behaviour is the
//! same on both paths.

/// `dst[i] = dst[i].wrapping_add(src[i])` for every index, in order.
///
/// # Panics
///
/// Panics if the slices do not have the same length.
#[inline(always)]
pub fn add_assign(dst: &mut [i64], src: &[i64]) {
    assert_eq!(dst.len(), src.len(), "Vectors must be the same length");

    dst.iter_mut()
        .zip(src.iter())
        .for_each(|(d, s)| *d = d.wrapping_add(*s));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_add_assign() {
        let mut dst = vec![1i64, 2, 3, 4, 5];
        let src = vec![10i64, 20, 30, 40, 50];

        add_assign(&mut dst, &src);

        assert_eq!(dst, vec![11, 22, 33, 44, 55]);
        assert_eq!(src, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_scalar_add_assign_wraps() {
        let mut dst = vec![i64::MAX, i64::MIN, -1];
        let src = vec![1i64, -1, i64::MIN];

        add_assign(&mut dst, &src);

        assert_eq!(dst, vec![i64::MIN, i64::MAX, i64::MAX]);
    }

    #[test]
    fn test_scalar_add_assign_empty() {
        let mut dst: Vec<i64> = Vec::new();
        add_assign(&mut dst, &[]);
        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "Vectors must be the same length")]
    fn test_scalar_add_assign_length_mismatch_panics() {
        let mut dst = vec![1i64, 2];
        add_assign(&mut dst, &[1]);
    }
}
