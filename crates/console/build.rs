fn main() {
    println!("cargo:rerun-if-env-changed=LOG");
    let level = std::env::var("LOG").unwrap_or_else(|_| "info".to_string());
    match level.as_str() {
        "error" | "ERROR" => log_feature("error"),
        "debug" | "DEBUG" => log_feature("debug"),
        "trace" | "TRACE" => log_feature("trace"),
        _ => log_feature("info"),
    }
}

fn log_feature(level: &str) {
    println!("cargo:rustc-cfg=feature=\"{level}\"")
}
