use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for multi-series line charts and the energy-mix sources.
pub fn series_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.70, 0.60))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Value gradient (bar charts colored by magnitude)
// ---------------------------------------------------------------------------

/// Map a normalized value in `[0, 1]` onto a cool-to-hot hue ramp
/// (blue for low values, red for high).
pub fn value_gradient(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let hue = 220.0 * (1.0 - t);
    hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
