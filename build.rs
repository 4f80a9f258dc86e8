fn main() {
    // Capture the current year at build time
    let now = chrono::Utc::now();

    // Exposed to the crate through env! (footer copyright)
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
