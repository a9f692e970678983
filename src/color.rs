use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color scales for the charts
// ---------------------------------------------------------------------------

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Sequential scale for magnitudes in `[0, 1]`: dark violet → warm yellow.
/// Used to shade the frequency bars by their count.
pub fn sequential(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    // Hue sweeps 270° (violet) down to 50° (yellow), brightening as it goes.
    let hue = 270.0 - t * 220.0;
    let lightness = 0.25 + t * 0.4;
    hsl_to_color32(Hsl::new(hue, 0.85, lightness))
}

/// Diverging scale for correlations in `[-1, 1]`:
/// blue (negative) → near-white (zero) → red (positive). NaN maps to gray.
pub fn diverging(v: f64) -> Color32 {
    if v.is_nan() {
        return Color32::GRAY;
    }
    let v = v.clamp(-1.0, 1.0) as f32;
    let (hue, saturation) = if v < 0.0 { (225.0, 0.75) } else { (5.0, 0.75) };
    // Strong values are dark and saturated, weak ones fade toward white.
    let lightness = 0.95 - v.abs() * 0.5;
    hsl_to_color32(Hsl::new(hue, saturation, lightness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diverging_handles_nan_and_extremes() {
        assert_eq!(diverging(f64::NAN), Color32::GRAY);
        // Extremes are darker than the neutral midpoint.
        let mid = diverging(0.0);
        let hot = diverging(1.0);
        let cold = diverging(-1.0);
        assert!(hot.r() as u16 + hot.g() as u16 + (hot.b() as u16)
            < mid.r() as u16 + mid.g() as u16 + mid.b() as u16);
        assert!(cold.r() as u16 + cold.g() as u16 + (cold.b() as u16)
            < mid.r() as u16 + mid.g() as u16 + mid.b() as u16);
    }

    #[test]
    fn sequential_clamps_out_of_range_input() {
        assert_eq!(sequential(-2.0), sequential(0.0));
        assert_eq!(sequential(7.0), sequential(1.0));
    }
}
