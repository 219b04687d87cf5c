//! Runtime capability detection.
//!
//! The widest kernel the CPU can run is detected once, on first use, and
//! cached for the lifetime of the process. `SIMDADD_MAX_LEVEL` can cap the
//! detected level (useful to exercise the narrower kernels on a wide machine).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::SimdAddError;

/// Environment variable that caps the detected level.
pub const MAX_LEVEL_ENV: &str = "SIMDADD_MAX_LEVEL";

/// Kernel variants, ordered from narrowest to widest register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimdLevel {
    /// One element at a time, every platform.
    Scalar,
    /// 128-bit registers: NEON on aarch64, SSE2 on x86.
    Vector128,
    /// 256-bit registers: AVX2 on x86.
    Vector256,
    /// 512-bit registers: AVX-512F on x86.
    Vector512,
}

impl SimdLevel {
    /// Every level, narrowest first.
    pub const ALL: [SimdLevel; 4] = [
        SimdLevel::Scalar,
        SimdLevel::Vector128,
        SimdLevel::Vector256,
        SimdLevel::Vector512,
    ];

    /// Number of `i64` lanes processed per vector instruction (`W`).
    #[inline]
    pub const fn lane_count(self) -> usize {
        match self {
            SimdLevel::Scalar => 1,
            SimdLevel::Vector128 => 2,
            SimdLevel::Vector256 => 4,
            SimdLevel::Vector512 => 8,
        }
    }

    /// Lower-case name, as accepted by `FromStr` and `SIMDADD_MAX_LEVEL`.
    pub const fn name(self) -> &'static str {
        match self {
            SimdLevel::Scalar => "scalar",
            SimdLevel::Vector128 => "vector128",
            SimdLevel::Vector256 => "vector256",
            SimdLevel::Vector512 => "vector512",
        }
    }

    /// Whether this build has a kernel for the level and the running CPU can execute it.
    pub fn is_supported(self) -> bool {
        match self {
            SimdLevel::Scalar => true,
            SimdLevel::Vector128 => vector128_detected(),
            SimdLevel::Vector256 => vector256_detected(),
            SimdLevel::Vector512 => vector512_detected(),
        }
    }

    /// Levels usable on this machine, narrowest first.
    pub fn supported() -> impl Iterator<Item = SimdLevel> {
        Self::ALL.into_iter().filter(|level| level.is_supported())
    }

    /// Widest supported level that does not exceed `cap`.
    pub fn best_up_to(cap: SimdLevel) -> SimdLevel {
        Self::ALL
            .into_iter()
            .rev()
            .filter(|level| *level <= cap)
            .find(|level| level.is_supported())
            .unwrap_or(SimdLevel::Scalar)
    }
}

impl fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimdLevel {
    type Err = SimdAddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimdAddError::InvalidLevel(s.to_string()))
    }
}

#[cfg(target_arch = "aarch64")]
fn vector128_detected() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn vector128_detected() -> bool {
    std::arch::is_x86_feature_detected!("sse2")
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "x86", target_arch = "x86_64")))]
fn vector128_detected() -> bool {
    false
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn vector256_detected() -> bool {
    std::arch::is_x86_feature_detected!("avx2")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn vector256_detected() -> bool {
    false
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512_intrinsics))]
fn vector512_detected() -> bool {
    std::arch::is_x86_feature_detected!("avx512f")
}

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), avx512_intrinsics)))]
fn vector512_detected() -> bool {
    false
}

/// Cached level, detected once at first use.
static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

fn max_level_from_env() -> Option<SimdLevel> {
    let raw = std::env::var(MAX_LEVEL_ENV).ok()?;

    match raw.parse() {
        Ok(level) => Some(level),
        Err(err) => {
            tracing::warn!(%err, "ignoring {MAX_LEVEL_ENV}");
            None
        }
    }
}

fn detect_simd_level() -> SimdLevel {
    let cap = max_level_from_env();
    let level = SimdLevel::best_up_to(cap.unwrap_or(SimdLevel::Vector512));

    tracing::debug!(
        level = %level,
        lanes = level.lane_count(),
        cap = ?cap,
        "selected i64 add kernel"
    );

    level
}

/// Returns the cached kernel level for this process.
#[inline]
#[must_use]
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(detect_simd_level)
}

/// Lane count `W` of the active kernel.
#[inline]
#[must_use]
pub fn lane_count() -> usize {
    simd_level().lane_count()
}
