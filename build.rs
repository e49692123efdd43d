fn main() {
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());

    // Asset prefix is baked into both the server and the wasm bundle
    println!("cargo:rerun-if-env-changed=PUBLIC_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
