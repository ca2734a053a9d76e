//! Render one arena's metrics as a radar-chart SVG on stdout.
//!
//! Usage: render_radar <arena-id> [size]
//!
//! Size is the square viewbox edge in pixels, default 80.

use std::process;

use rwai_arena::catalog;
use rwai_arena::radar::RadarGeometry;

fn main() {
    let arena_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => {
            eprintln!("usage: render_radar <arena-id> [size]");
            process::exit(2);
        }
    };
    let size: f64 = match std::env::args().nth(2) {
        Some(raw) => match raw.parse() {
            Ok(size) if size > 0.0 => size,
            _ => {
                eprintln!("size must be a positive number, got {raw}");
                process::exit(2);
            }
        },
        None => 80.0,
    };

    match catalog::catalog().arena(&arena_id) {
        Ok(arena) => {
            let geometry = RadarGeometry::compute(&arena.metrics, size);
            print!("{}", geometry.to_svg());
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
