// File: crates/chart-render-skia/build.rs
// Summary: Link extra system libraries Skia needs on Windows.

fn main() {
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
