//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `syncin_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("syncin_core ping={}", syncin_core::ping());
    println!("syncin_core version={}", syncin_core::core_version());
}
