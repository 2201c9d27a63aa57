//! Color utilities for the terminal sections
//!
//! The site's accent runs from a primary blue to purple; progress bars
//! and headings sample that gradient.

use crossterm::style::Color;

const PRIMARY_HUE: f32 = 210.0;
const PURPLE_HUE: f32 = 275.0;

/// Convert HSV color values to RGB
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// A tuple of (r, g, b) values each in range 0-255
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r_prime, g_prime, b_prime) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let r = ((r_prime + m) * 255.0).round() as u8;
    let g = ((g_prime + m) * 255.0).round() as u8;
    let b = ((b_prime + m) * 255.0).round() as u8;

    (r, g, b)
}

/// Accent color at position `t` (0.0 = primary, 1.0 = purple).
pub fn accent_gradient(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let hue = PRIMARY_HUE + (PURPLE_HUE - PRIMARY_HUE) * t;
    let (r, g, b) = hsv_to_rgb(hue, 0.75, 0.95);
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
    }

    #[test]
    fn test_hsv_to_rgb_grays() {
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_gradient_ends_differ() {
        assert_ne!(accent_gradient(0.0), accent_gradient(1.0));
        assert_eq!(accent_gradient(-1.0), accent_gradient(0.0));
    }
}
