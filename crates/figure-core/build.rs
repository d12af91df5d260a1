// File: crates/figure-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by the Skia font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
