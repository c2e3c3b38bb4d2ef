// File: crates/chart-core/build.rs
// Summary: Link system libraries Skia's font manager and ICU need on Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW, ...) from the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
