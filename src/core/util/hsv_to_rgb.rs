use crate::core::data::colour::Colour;

/// Converts an HSV triple to an RGB colour.
///
/// Hue is wrapped to `[0, 1)` by taking its fractional part, so values beyond
/// 1.0 cycle through the wheel again; saturation and value are clamped to
/// `[0, 1]`. Channels round to the nearest byte.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let hue = hue.rem_euclid(1.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    let h = hue * 6.0;
    let sector = h.floor() as u32;
    let f = h - h.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Colour {
        r: (r * 255.0 + 0.5) as u8,
        g: (g * 255.0 + 0.5) as u8,
        b: (b * 255.0 + 0.5) as u8,
    }
}
