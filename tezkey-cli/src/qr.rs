//! Terminal QR code rendering.

use qrcode::{Color, QrCode};

/// Modules of blank border around the code.
const QUIET_ZONE: usize = 2;

/// Render `data` as rows of half-block characters, two modules per row.
///
/// Returns `None` if the data does not fit in a QR code.
pub fn render(data: &str) -> Option<Vec<String>> {
    let code = QrCode::new(data).ok()?;
    let width = code.width();
    let colors = code.to_colors();
    let total = width + QUIET_ZONE * 2;

    let dark = |x: usize, y: usize| -> bool {
        if x < QUIET_ZONE || y < QUIET_ZONE {
            return false;
        }
        let (x, y) = (x - QUIET_ZONE, y - QUIET_ZONE);
        x < width && y < width && colors[y * width + x] == Color::Dark
    };

    let rows = (0..total)
        .step_by(2)
        .map(|y| {
            (0..total)
                .map(|x| match (dark(x, y), dark(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect()
        })
        .collect();
    Some(rows)
}

/// Print a QR code for `data` to stdout.
pub fn render_to_terminal(data: &str) {
    let Some(rows) = render(data) else {
        eprintln!("Failed to generate QR code for {data}");
        return;
    };

    println!();
    for row in rows {
        println!("      {row}");
    }
}
