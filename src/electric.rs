//! Full-screen "electric" noise background used behind the contact page.

use crate::color::{css_color_or, Rgb};
use crate::ocean::Palette;

pub const DEFAULT_ELECTRIC_LUSH: &str = "#00d1b0";
pub const DEFAULT_ELECTRIC_BREEZE: &str = "#09acee";
pub const DEFAULT_ELECTRIC_BACKGROUND: &str = "#140a32";

/// Palette from the stylesheet's `--shader-*` values, falling back to the
/// electric defaults rather than the ocean's.
pub fn electric_palette(lush: &str, breeze: &str, background: &str) -> Palette {
    Palette {
        lush: css_color_or(lush, DEFAULT_ELECTRIC_LUSH),
        breeze: css_color_or(breeze, DEFAULT_ELECTRIC_BREEZE),
        background: css_color_or(background, DEFAULT_ELECTRIC_BACKGROUND),
    }
}

/// Uniforms of the electric shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricState {
    pub time: f32,
    pub lush: Rgb,
    pub breeze: Rgb,
    pub background: Rgb,
}

impl Default for ElectricState {
    fn default() -> Self {
        Self {
            time: 0.0,
            lush: css_color_or(DEFAULT_ELECTRIC_LUSH, DEFAULT_ELECTRIC_LUSH),
            breeze: css_color_or(DEFAULT_ELECTRIC_BREEZE, DEFAULT_ELECTRIC_BREEZE),
            background: css_color_or(DEFAULT_ELECTRIC_BACKGROUND, DEFAULT_ELECTRIC_BACKGROUND),
        }
    }
}

impl ElectricState {
    /// Time is wall-clock (seconds since the scene started); colours ease
    /// towards the palette so theme switches fade instead of snapping.
    pub fn step(&mut self, elapsed: f32, palette: &Palette) {
        self.time = elapsed.max(0.0);
        self.lush = self.lush.lerp(&palette.lush, 0.05);
        self.breeze = self.breeze.lerp(&palette.breeze, 0.05);
        self.background = self.background.lerp(&palette.background, 0.05);
    }
}

/// Two triangles covering clip space, with uvs derived in the shader.
pub const FULLSCREEN_QUAD: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

pub const ELECTRIC_VERTEX_SHADER: &str = r#"
attribute vec2 position;
varying vec2 vUv;

void main() {
    vUv = position * 0.5 + 0.5;
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

pub const ELECTRIC_FRAGMENT_SHADER: &str = r#"
precision highp float;

uniform float uTime;
uniform vec3 uColorLush;
uniform vec3 uColorBreeze;
uniform vec3 uColorBg;
varying vec2 vUv;

// 2D simplex noise
vec3 permute(vec3 x) { return mod(((x * 34.0) + 1.0) * x, 289.0); }

float snoise(vec2 v) {
    const vec4 C = vec4(0.211324865405187, 0.366025403784439,
                        -0.577350269189626, 0.024390243902439);
    vec2 i = floor(v + dot(v, C.yy));
    vec2 x0 = v - i + dot(i, C.xx);
    vec2 i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
    vec4 x12 = x0.xyxy + C.xxzz;
    x12.xy -= i1;
    i = mod(i, 289.0);
    vec3 p = permute(permute(i.y + vec3(0.0, i1.y, 1.0)) + i.x + vec3(0.0, i1.x, 1.0));
    vec3 m = max(0.5 - vec3(dot(x0, x0), dot(x12.xy, x12.xy), dot(x12.zw, x12.zw)), 0.0);
    m = m * m;
    m = m * m;
    vec3 x = 2.0 * fract(p * C.www) - 1.0;
    vec3 h = abs(x) - 0.5;
    vec3 ox = floor(x + 0.5);
    vec3 a0 = x - ox;
    m *= 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);
    vec3 g;
    g.x = a0.x * x0.x + h.x * x0.y;
    g.yz = a0.yz * x12.xz + h.yz * x12.yw;
    return 130.0 * dot(m, g);
}

void main() {
    vec2 movingUv = vUv;
    movingUv.y -= uTime * 0.05;

    float baseNoise = snoise(movingUv * 5.0);
    float detailNoise = snoise((movingUv + vec2(uTime * 0.1, 0.0)) * 10.0);
    float combinedNoise = baseNoise + detailNoise * 0.3;

    // thin bright bands where the noise crosses the sine peaks
    float electricity = sin(combinedNoise * 15.0);
    electricity = smoothstep(0.9, 0.95, electricity);

    vec3 electricColor = mix(uColorBreeze, uColorLush, detailNoise * 0.5 + 0.5);
    vec3 finalColor = mix(uColorBg, electricColor, electricity + (baseNoise * 0.1));
    gl_FragColor = vec4(pow(finalColor, vec3(1.0 / 2.2)), 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_tracks_time_and_eases_colour() {
        let mut state = ElectricState::default();
        let palette = Palette::from_css("#ffffff", "#ffffff", "#000000");
        state.step(2.5, &palette);
        assert_eq!(state.time, 2.5);
        assert!(state.lush.r > ElectricState::default().lush.r);
        assert!(state.lush.r < 1.0);

        state.step(-1.0, &palette);
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_electric_palette_fallbacks() {
        let palette = electric_palette("", "not a colour", "#ffffff");
        assert_eq!(palette.lush, ElectricState::default().lush);
        assert_eq!(palette.breeze, ElectricState::default().breeze);
        assert_eq!(palette.background, css_color_or("#ffffff", "#000000"));
    }

    #[test]
    fn test_quad_covers_clip_space() {
        let xs = FULLSCREEN_QUAD.iter().step_by(2);
        assert!(xs.clone().any(|&x| x == -1.0) && xs.clone().any(|&x| x == 1.0));
        assert_eq!(FULLSCREEN_QUAD.len() / 2, 6);
    }
}
