//! C ABI entry point.
//!
//! This is the only place where raw pointers coming from outside Rust are
//! turned into slices. Everything past [`simdadd_add_i64`] works on
//! `&mut [i64]` / `&[i64]`.

use std::slice;

use crate::simd::add_in_place;

/// `dst[i] += src[i]` for `i` in `0..n`, wrapping on overflow.
///
/// Returns without touching memory when `n == 0` or when either pointer is
/// null. `dst == src` is allowed and doubles every element.
///
/// # Safety
///
/// When `n > 0` and both pointers are non-null:
///
/// - `dst` must be aligned for `i64` and valid for reads and writes of `n`
///   consecutive `i64`.
/// - `src` must be aligned for `i64` and valid for reads of `n` consecutive `i64`.
/// - The two ranges must either be the same range (`dst == src`) or not
///   overlap at all, and nothing else may access `dst` for the duration of
///   the call.
#[no_mangle]
pub unsafe extern "C" fn simdadd_add_i64(dst: *mut i64, src: *const i64, n: usize) {
    if n == 0 || dst.is_null() || src.is_null() {
        return;
    }

    if std::ptr::eq(dst.cast_const(), src) {
        // SAFETY: aligned and valid for `n` elements per the caller contract,
        // and only one reference is formed over the shared range.
        let dst = unsafe { slice::from_raw_parts_mut(dst, n) };
        dst.iter_mut().for_each(|d| *d = d.wrapping_add(*d));
        return;
    }

    // SAFETY: non-null, aligned, disjoint, and valid for `n` elements per the caller contract.
    let (dst, src) = unsafe { (slice::from_raw_parts_mut(dst, n), slice::from_raw_parts(src, n)) };

    add_in_place(dst, src);
}
