//! Turning CSS custom-property values into linear colours for shader uniforms.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty colour value")]
    Empty,
    #[error("unrecognised colour value: {0}")]
    Unrecognised(String),
}

/// Linear-space RGB with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a linear colour from sRGB channels in `0.0..=1.0`.
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
        }
    }

    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Hue in degrees, saturation and lightness in `0.0..=1.0`.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self::from_srgb(r, g, b)
    }

    pub fn lerp(&self, target: &Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Back to display (sRGB) space, e.g. for a clear colour.
    pub fn to_srgb(self) -> Rgb {
        Rgb {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
        }
    }
}

pub fn linear_to_srgb(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c < 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let h = (h.rem_euclid(360.0)) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

/// Parses the colour formats used by the stylesheet's shader variables.
///
/// Accepted: `#rgb`, `#rrggbb`, bare RGB triplets (`"0 209 176"`), bare HSL
/// triplets (`"190 50% 5%"`), and `rgb(...)` / `hsl(...)` in either comma or
/// space separated form.
pub fn parse_css_color(value: &str) -> Result<Rgb, ColorError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ColorError::Empty);
    }
    let unrecognised = || ColorError::Unrecognised(value.to_string());
    let lower = value.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(unrecognised);
    }

    let (body, func) = if let Some(inner) = strip_function(&lower, "rgb") {
        (inner, Some("rgb"))
    } else if let Some(inner) = strip_function(&lower, "hsl") {
        (inner, Some("hsl"))
    } else {
        (lower.as_str(), None)
    };

    // drop any "/ alpha" suffix
    let body = body.split('/').next().unwrap_or_default();
    let mut parts = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>();
    // legacy comma syntax carries alpha as a fourth argument
    if func.is_some() && parts.len() == 4 {
        parts.truncate(3);
    }
    if parts.len() != 3 {
        return Err(unrecognised());
    }

    let is_hsl = func == Some("hsl") || (func.is_none() && body.contains('%'));
    if is_hsl {
        let h = parse_number(parts[0].trim_end_matches("deg")).ok_or_else(unrecognised)?;
        let s = parse_number(parts[1].trim_end_matches('%')).ok_or_else(unrecognised)?;
        let l = parse_number(parts[2].trim_end_matches('%')).ok_or_else(unrecognised)?;
        return Ok(Rgb::from_hsl(h, s / 100.0, l / 100.0));
    }

    let mut channels = [0.0f32; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = if let Some(pct) = part.strip_suffix('%') {
            parse_number(pct).ok_or_else(unrecognised)? / 100.0
        } else {
            parse_number(part).ok_or_else(unrecognised)? / 255.0
        };
    }
    Ok(Rgb::from_srgb(channels[0], channels[1], channels[2]))
}

/// Like [`parse_css_color`] but falls back to `fallback` (which must itself
/// parse; otherwise black is used).
pub fn css_color_or(value: &str, fallback: &str) -> Rgb {
    parse_css_color(value)
        .or_else(|_| parse_css_color(fallback))
        .unwrap_or_default()
}

fn strip_function<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let rest = value.strip_prefix(name)?;
    let rest = rest.strip_prefix('a').unwrap_or(rest);
    rest.trim_start().strip_prefix('(')?.strip_suffix(')')
}

fn parse_number(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.chars().map(|c| c.to_digit(16)).collect::<Option<Vec<_>>>()?;
    let (r, g, b) = match digits.as_slice() {
        [r, g, b] => (r * 17, g * 17, b * 17),
        [r1, r2, g1, g2, b1, b2] => (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2),
        _ => return None,
    };
    Some(Rgb::from_srgb8(r as u8, g as u8, b as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // mid grey darkens in linear space
        assert!((srgb_to_linear(0.5) - 0.2140).abs() < 1e-3);
    }

    #[test]
    fn test_srgb_round_trip() {
        let c = Rgb::from_srgb8(92, 126, 138).to_srgb();
        assert!((c.r - 92.0 / 255.0).abs() < 1e-3);
        assert!((c.g - 126.0 / 255.0).abs() < 1e-3);
        assert!((c.b - 138.0 / 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_hex_forms() {
        let white = Rgb::new(1.0, 1.0, 1.0);
        assert!(close(parse_css_color("#fff").unwrap(), white));
        assert!(close(parse_css_color("#FFFFFF").unwrap(), white));
        assert!(close(
            parse_css_color("#5c7e8a").unwrap(),
            Rgb::from_srgb8(0x5c, 0x7e, 0x8a)
        ));
        assert!(parse_css_color("#12345").is_err());
        assert!(parse_css_color("#ggg").is_err());
    }

    #[test]
    fn test_space_separated_rgb() {
        let lush = parse_css_color("0 209 176").unwrap();
        assert!(close(lush, Rgb::from_srgb8(0, 209, 176)));
        assert_eq!(lush.r, 0.0);
    }

    #[test]
    fn test_function_rgb() {
        let expected = Rgb::from_srgb8(9, 172, 238);
        assert!(close(parse_css_color("rgb(9, 172, 238)").unwrap(), expected));
        assert!(close(parse_css_color("rgb(9 172 238 / 0.5)").unwrap(), expected));
        assert!(close(parse_css_color("rgba(9,172,238,0.4)").unwrap(), expected));
    }

    #[test]
    fn test_hsl_forms() {
        // pure red
        let red = Rgb::new(1.0, 0.0, 0.0);
        assert!(close(parse_css_color("0 100% 50%").unwrap(), red));
        assert!(close(parse_css_color("hsl(0, 100%, 50%)").unwrap(), red));
        assert!(close(parse_css_color("hsl(360deg 100% 50%)").unwrap(), red));
        // zero saturation is grey
        let grey = parse_css_color("190 0% 50%").unwrap();
        assert!((grey.r - grey.g).abs() < 1e-6 && (grey.g - grey.b).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_css_color("   "), Err(ColorError::Empty));
        assert!(matches!(
            parse_css_color("teal"),
            Err(ColorError::Unrecognised(_))
        ));
        assert!(parse_css_color("1 2").is_err());
        assert!(parse_css_color("rgb(a, b, c)").is_err());
    }

    #[test]
    fn test_fallback() {
        let fallback = css_color_or("", "#5c7e8a");
        assert!(close(fallback, Rgb::from_srgb8(0x5c, 0x7e, 0x8a)));
        assert_eq!(css_color_or("nope", "also nope"), Rgb::default());
    }

    #[test]
    fn test_lerp() {
        let a = Rgb::new(0.0, 0.0, 0.0);
        let b = Rgb::new(1.0, 0.5, 0.25);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert!(close(a.lerp(&b, 0.5), Rgb::new(0.5, 0.25, 0.125)));
    }
}
