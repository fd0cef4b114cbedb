//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `waymark_core` linkage.
//! - Decode a share link or token passed as the first argument.

use std::time::{SystemTime, UNIX_EPOCH};
use waymark_core::share;

fn main() {
    println!("waymark_core version={}", waymark_core::core_version());

    let Some(arg) = std::env::args().nth(1) else {
        return;
    };

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64);

    // Accept either a bare token or a full URL carrying a #share= fragment.
    let token = share::token_from_fragment(&arg).unwrap_or(arg.as_str());
    match share::decode(token, now_ms) {
        Ok(shared) => {
            println!(
                "shared note id={} at=({:.5}, {:.5}) heading={} radius_m={} tolerance_deg={}",
                shared.id,
                shared.lat,
                shared.lon,
                shared
                    .heading
                    .map_or_else(|| "--".to_string(), |deg| format!("{deg:.0}")),
                shared.unlock_radius_m,
                shared.unlock_tolerance_deg,
            );
            println!("text: {}", shared.text);
        }
        Err(err) => {
            eprintln!("failed to decode share token: {err}");
            std::process::exit(1);
        }
    }
}
