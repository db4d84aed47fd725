// File: crates/bars-core/build.rs
// Summary: Build script linking the Windows system libraries Skia needs for font discovery.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's Windows font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
