const EVENT_VARS: [&str; 4] = [
    "HPM_ICACHE_MISS_EVENT",
    "HPM_BRANCH_TAKEN_EVENT",
    "HPM_BRANCH_MISS_EVENT",
    "HPM_DCACHE_MISS_EVENT",
];

fn main() {
    // the selectors are baked in by `usize_env_or!`
    for var in EVENT_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
