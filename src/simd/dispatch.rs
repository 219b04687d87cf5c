//! Public entry points routed to the kernel of the cached [`SimdLevel`].
//!
//! Length mismatch policy: [`add_in_place`] and [`scalar_add_in_place`] leave
//! `dst` untouched and return normally. [`try_add_in_place`] and
//! [`add_in_place_with`] report the mismatch as
//! [`SimdAddError::LengthMismatch`] instead, also without touching `dst`.

use crate::error::{check_lengths, Result, SimdAddError};
use crate::simd::level::{simd_level, SimdLevel};
use crate::simd::scalar;
use crate::simd::traits::SimdAddAssign;

#[cfg(target_arch = "aarch64")]
use crate::simd::neon;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::simd::{avx2, sse2};

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512_intrinsics))]
use crate::simd::avx512;

/// Adds `src` into `dst` element-wise, in place, wrapping on overflow.
///
/// Does nothing when the lengths differ or both slices are empty.
///
/// # Example
///
/// ```
/// let mut dst = vec![1i64, 2, 3, 4, 5];
/// let src = vec![10i64, 20, 30, 40, 50];
///
/// simdadd::add_in_place(&mut dst, &src);
///
/// assert_eq!(dst, [11, 22, 33, 44, 55]);
/// ```
#[inline]
pub fn add_in_place(dst: &mut [i64], src: &[i64]) {
    if dst.len() != src.len() {
        tracing::debug!(
            dst_len = dst.len(),
            src_len = src.len(),
            "length mismatch, dst left unchanged"
        );
        return;
    }

    run(simd_level(), dst, src);
}

/// Same as [`add_in_place`], but reports a length mismatch.
///
/// # Errors
///
/// [`SimdAddError::LengthMismatch`] if `dst.len() != src.len()`; `dst` is not modified.
#[inline]
pub fn try_add_in_place(dst: &mut [i64], src: &[i64]) -> Result<()> {
    check_lengths(dst.len(), src.len())?;

    run(simd_level(), dst, src);

    Ok(())
}

/// Runs one specific kernel, bypassing the cached level.
///
/// # Errors
///
/// - [`SimdAddError::UnsupportedLevel`] if this CPU cannot run `level`.
/// - [`SimdAddError::LengthMismatch`] if `dst.len() != src.len()`.
///
/// `dst` is not modified on error.
pub fn add_in_place_with(level: SimdLevel, dst: &mut [i64], src: &[i64]) -> Result<()> {
    if !level.is_supported() {
        return Err(SimdAddError::UnsupportedLevel(level));
    }

    check_lengths(dst.len(), src.len())?;

    run(level, dst, src);

    Ok(())
}

/// Reference scalar path, with the same mismatch policy as [`add_in_place`].
#[inline]
pub fn scalar_add_in_place(dst: &mut [i64], src: &[i64]) {
    if dst.len() != src.len() {
        tracing::debug!(
            dst_len = dst.len(),
            src_len = src.len(),
            "length mismatch, dst left unchanged"
        );
        return;
    }

    scalar::add_assign(dst, src);
}

// `level` must be supported and the lengths equal: every caller above
// checks both before getting here.
#[inline(always)]
fn run(level: SimdLevel, dst: &mut [i64], src: &[i64]) {
    debug_assert!(level.is_supported());
    debug_assert_eq!(dst.len(), src.len());

    if dst.is_empty() {
        return;
    }

    match level {
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Vector128 => unsafe { neon::add::add_assign(dst, src) },
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        SimdLevel::Vector128 => unsafe { sse2::add::add_assign(dst, src) },
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        SimdLevel::Vector256 => unsafe { avx2::add::add_assign(dst, src) },
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512_intrinsics))]
        SimdLevel::Vector512 => unsafe { avx512::add::add_assign(dst, src) },
        _ => scalar::add_assign(dst, src),
    }
}

impl SimdAddAssign for [i64] {
    #[inline(always)]
    fn simd_add_assign(&mut self, rhs: &[i64]) {
        add_in_place(self, rhs)
    }

    #[inline(always)]
    fn scalar_add_assign(&mut self, rhs: &[i64]) {
        scalar_add_in_place(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_add_in_place_example() {
        let mut dst = vec![1i64, 2, 3, 4, 5];
        let src = vec![10i64, 20, 30, 40, 50];

        add_in_place(&mut dst, &src);

        assert_eq!(dst, vec![11, 22, 33, 44, 55]);
        assert_eq!(src, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_mismatch_is_silent_noop() {
        let mut dst = vec![1i64, 2, 3];
        add_in_place(&mut dst, &[1, 1]);
        assert_eq!(dst, vec![1, 2, 3]);

        scalar_add_in_place(&mut dst, &[1, 1, 1, 1]);
        assert_eq!(dst, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_add_in_place_reports_mismatch() {
        let mut dst = vec![1i64, 2, 3];

        let err = try_add_in_place(&mut dst, &[1]).unwrap_err();

        assert_eq!(
            err,
            SimdAddError::LengthMismatch {
                dst_len: 3,
                src_len: 1
            }
        );
        assert_eq!(dst, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_in_place_with_every_supported_level() {
        for level in SimdLevel::supported() {
            let mut dst: Vec<i64> = (0..11).collect();
            let src: Vec<i64> = (0..11).map(|i| i * 10).collect();

            add_in_place_with(level, &mut dst, &src).unwrap();

            let expected: Vec<i64> = (0..11).map(|i| i * 11).collect();
            assert_eq!(dst, expected, "level {level}");
        }
    }

    #[test]
    fn test_add_in_place_with_unsupported_level() {
        let Some(level) = SimdLevel::ALL.into_iter().find(|l| !l.is_supported()) else {
            // Every level runs here, nothing to reject
            return;
        };

        let mut dst = vec![1i64; 4];
        assert_eq!(
            add_in_place_with(level, &mut dst, &[1; 4]),
            Err(SimdAddError::UnsupportedLevel(level))
        );
        assert_eq!(dst, vec![1; 4]);
    }

    #[test]
    fn test_extension_trait_on_vec_and_slice() {
        let mut dst = vec![5i64; 6];
        let src = vec![-5i64; 6];

        dst.simd_add_assign(&src);
        assert_eq!(dst, vec![0; 6]);

        dst[..3].scalar_add_assign(&src[..3]);
        assert_eq!(dst, vec![-5, -5, -5, 0, 0, 0]);
    }

    #[test]
    fn test_both_noop_paths_log_mismatch() {
        let mut dst = vec![1i64, 2, 3];

        let logs = captured_logs(|| add_in_place(&mut dst, &[1]));
        assert!(logs.contains("length mismatch"), "add_in_place logs: {logs}");
        assert!(logs.contains("src_len=1"), "add_in_place logs: {logs}");

        let logs = captured_logs(|| scalar_add_in_place(&mut dst, &[1, 2]));
        assert!(logs.contains("length mismatch"), "scalar_add_in_place logs: {logs}");
        assert!(logs.contains("src_len=2"), "scalar_add_in_place logs: {logs}");

        assert_eq!(dst, vec![1, 2, 3]);
    }
}
