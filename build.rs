use std::env;
use std::process::Command;

// First stable release exposing the AVX-512F intrinsics in `std::arch`.
const AVX512_STABLE_MINOR: u32 = 89;

// What we learn from `rustc --version --verbose`
#[derive(PartialEq, Eq, Debug)]
struct RustcInfo {
    minor: u32,
}

impl RustcInfo {
    fn probe() -> RustcInfo {
        let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
        let output = Command::new(rustc).args(["--version", "--verbose"]).output();

        let version_info = match output {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            // Can't ask the compiler, assume the most conservative toolchain
            Err(_) => return RustcInfo { minor: 0 },
        };

        Self::parse(&version_info).unwrap_or(RustcInfo { minor: 0 })
    }

    // Parses the `release: 1.xx.y[-channel]` line of `rustc -vV`
    fn parse(version_info: &str) -> Option<RustcInfo> {
        let release = version_info
            .lines()
            .find_map(|line| line.strip_prefix("release: "))?;

        let minor = release.split('.').nth(1)?.parse().ok()?;

        Some(RustcInfo { minor })
    }

    fn has_avx512_intrinsics(&self) -> bool {
        self.minor >= AVX512_STABLE_MINOR
    }
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed=RUSTC");

    // Disable flag warnings for build
    println!("cargo::rustc-check-cfg=cfg(avx512_intrinsics)");

    let rustc = RustcInfo::probe();

    // The 512-bit kernel is only compiled when the toolchain can express it,
    // runtime detection still decides whether it is used.
    if rustc.has_avx512_intrinsics() {
        println!("cargo:rustc-cfg=avx512_intrinsics");
    }
}
