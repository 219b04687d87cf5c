/// A fixed-width vector register holding `LANE_COUNT` lanes of `T`.
///
/// Every method is `unsafe` and compiled with the target features of its
/// instruction set: callers must only use a lane type once the matching
/// [`SimdLevel`](crate::simd::SimdLevel) has been detected on the running CPU.
pub trait SimdVec<T>: Copy {
    /// Number of `T` lanes in one register.
    const LANE_COUNT: usize;

    /// Creates a vector with every lane set to `value`.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set of the implementing type.
    unsafe fn splat(value: T) -> Self;

    /// Loads `LANE_COUNT` contiguous elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANE_COUNT` elements. No alignment
    /// beyond that of `T` is required.
    unsafe fn load_unaligned(ptr: *const T) -> Self;

    /// Stores all lanes to `LANE_COUNT` contiguous elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANE_COUNT` elements. No alignment
    /// beyond that of `T` is required.
    unsafe fn store_unaligned(&self, ptr: *mut T);

    /// Lane-wise addition, wrapping on overflow.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set of the implementing type.
    unsafe fn add(self, rhs: Self) -> Self;

    /// Copies the lanes out into a `Vec`.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set of the implementing type.
    unsafe fn to_vec(self) -> Vec<T>;
}

/// In-place element-wise addition on `i64` slices.
///
/// Both methods leave `self` untouched when the lengths differ.
pub trait SimdAddAssign {
    /// `self[i] += rhs[i]` using the widest kernel available on this CPU.
    fn simd_add_assign(&mut self, rhs: &[i64]);

    /// `self[i] += rhs[i]` one element at a time.
    fn scalar_add_assign(&mut self, rhs: &[i64]);
}
