//! Maths behind the particle ocean: theme-driven physics targets, per-frame
//! easing, the wave function the vertex shader evaluates, the particle grid
//! and the camera used to turn pointer clicks into ripple centres.

use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

use crate::color::{css_color_or, Rgb};
use crate::theme::ResolvedTheme;

pub const DEFAULT_LUSH: &str = "rgb(0, 209, 176)";
pub const DEFAULT_BREEZE: &str = "rgb(9, 172, 238)";
pub const DEFAULT_BACKGROUND: &str = "#5c7e8a";

/// Side length of the square ocean (and its click hitbox), in world units.
pub const OCEAN_SIZE: f32 = 12.0;
pub const OCEAN_SEGMENTS_X: usize = 256;
pub const OCEAN_SEGMENTS_Z: usize = 128;

// a zero-width canvas would make the projection singular
const MIN_ASPECT: f32 = 1e-3;

/// Ripples are only applied this long after a click.
pub const RIPPLE_LIFETIME: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    Additive,
    Normal,
}

/// Colours read from the stylesheet's `--shader-*` custom properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub lush: Rgb,
    pub breeze: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            lush: css_color_or(DEFAULT_LUSH, DEFAULT_LUSH),
            breeze: css_color_or(DEFAULT_BREEZE, DEFAULT_BREEZE),
            background: css_color_or(DEFAULT_BACKGROUND, DEFAULT_BACKGROUND),
        }
    }
}

impl Palette {
    /// Missing or malformed values fall back to the built-in colours.
    pub fn from_css(lush: &str, breeze: &str, background: &str) -> Self {
        Self {
            lush: css_color_or(lush, DEFAULT_LUSH),
            breeze: css_color_or(breeze, DEFAULT_BREEZE),
            background: css_color_or(background, DEFAULT_BACKGROUND),
        }
    }
}

/// Values the scene eases towards after a theme change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanTargets {
    pub speed: f32,
    pub elevation: f32,
    pub frequency: f32,
    pub alpha_boost: f32,
    pub blending: Blending,
    pub palette: Palette,
}

impl OceanTargets {
    pub fn for_theme(theme: ResolvedTheme, palette: Palette) -> Self {
        match theme {
            // slow, tall, widely spaced swells drawn as thick ink
            ResolvedTheme::Light => Self {
                speed: 0.55,
                elevation: 0.9,
                frequency: 1.0,
                alpha_boost: 4.0,
                blending: Blending::Normal,
                palette,
            },
            // quick, tight, glowing chop
            ResolvedTheme::Dark => Self {
                speed: 0.9,
                elevation: 0.6,
                frequency: 1.5,
                alpha_boost: 1.5,
                blending: Blending::Additive,
                palette,
            },
        }
    }
}

/// Everything the ocean shaders read as uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanState {
    /// Accumulated `delta * speed`; the waves are driven by this rather than
    /// wall time so a speed change never makes them run backwards.
    pub time_offset: f32,
    pub speed: f32,
    pub elevation: f32,
    pub frequency: f32,
    pub alpha_boost: f32,
    pub color_start: Rgb,
    pub color_end: Rgb,
    pub background: Rgb,
    pub click: [f32; 2],
    pub last_click_time: f32,
}

impl Default for OceanState {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            time_offset: 0.0,
            speed: 0.75,
            elevation: 0.6,
            frequency: 1.5,
            alpha_boost: 1.5,
            color_start: palette.lush,
            color_end: palette.breeze,
            background: palette.background,
            // off the ocean until someone clicks
            click: [-10.0, -10.0],
            last_click_time: -10.0,
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl OceanState {
    /// Advances one frame of `delta` seconds, easing towards `targets`.
    pub fn step(&mut self, delta: f32, targets: &OceanTargets) {
        self.speed = lerp(self.speed, targets.speed, 0.025);
        self.elevation = lerp(self.elevation, targets.elevation, 0.03);
        self.frequency = lerp(self.frequency, targets.frequency, 0.05);

        self.time_offset += delta.max(0.0) * self.speed;

        self.color_start = self.color_start.lerp(&targets.palette.lush, 0.05);
        self.color_end = self.color_end.lerp(&targets.palette.breeze, 0.05);
        self.background = self.background.lerp(&targets.palette.background, 0.05);
        self.alpha_boost = lerp(self.alpha_boost, targets.alpha_boost, 0.05);
    }

    /// Starts a ripple centred on the ground-plane point `(x, z)`.
    pub fn click(&mut self, x: f32, z: f32) {
        self.click = [x, z];
        self.last_click_time = self.time_offset;
    }

    pub fn time_since_click(&self) -> f32 {
        self.time_offset - self.last_click_time
    }

    /// Height of the surface at `(x, z)`; mirrors `OCEAN_VERTEX_SHADER`.
    pub fn wave_elevation(&self, x: f32, z: f32) -> f32 {
        let t = self.time_offset;
        let f = self.frequency;
        let mut elevation =
            (x * f + t).sin() * (z * (f * 0.8) + t * 0.8).sin() * self.elevation;
        elevation -= ((x * (f * 2.5) + t * 2.0).sin() * 0.1).abs();

        let since = self.time_since_click();
        if (0.0..RIPPLE_LIFETIME).contains(&since) {
            let dx = x - self.click[0];
            let dz = z - self.click[1];
            let dist = (dx * dx + dz * dz).sqrt();
            let ripple =
                (dist * 5.0 - since * 10.0).sin() * (-dist * 0.5).exp() * (-since * 1.5).exp();
            elevation += ripple * 0.3;
        }
        elevation
    }
}

/// A flat grid of particle positions on the `y = 0` plane, centred on the
/// origin.
#[derive(Debug, Clone)]
pub struct PlaneGrid {
    positions: Vec<f32>,
}

impl PlaneGrid {
    pub fn new(width: f32, depth: f32, segments_x: usize, segments_z: usize) -> Self {
        let segments_x = segments_x.max(1);
        let segments_z = segments_z.max(1);
        let mut positions = Vec::with_capacity((segments_x + 1) * (segments_z + 1) * 3);
        for iz in 0..=segments_z {
            let z = (iz as f32 / segments_z as f32 - 0.5) * depth;
            for ix in 0..=segments_x {
                let x = (ix as f32 / segments_x as f32 - 0.5) * width;
                positions.extend_from_slice(&[x, 0.0, z]);
            }
        }
        Self { positions }
    }

    pub fn ocean() -> Self {
        Self::new(OCEAN_SIZE, OCEAN_SIZE, OCEAN_SEGMENTS_X, OCEAN_SEGMENTS_Z)
    }

    /// Flattened `[x, y, z]` triples.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

pub type Mat4 = Matrix4<f32>;

/// Fixed camera hovering above the ocean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 2.0, 4.0),
            target: Point3::origin(),
            fov_y: 60f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Isometry3::look_at_rh(&self.eye, &self.target, &Vector3::y()).to_homogeneous()
    }

    /// OpenGL-style projection; depth lands in `-1..=1`.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Perspective3::new(aspect.max(MIN_ASPECT), self.fov_y, self.near, self.far).to_homogeneous()
    }

    /// Casts a ray through a point in normalized device coordinates and
    /// returns where it meets the ocean's hitbox on the `y = 0` plane.
    pub fn ray_to_ground(&self, ndc_x: f32, ndc_y: f32, aspect: f32) -> Option<(f32, f32)> {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(&Vector3::y()).normalize();
        let up = right.cross(&forward);
        let tan_half = (self.fov_y / 2.0).tan();
        let dir = forward + right * (ndc_x * tan_half * aspect) + up * (ndc_y * tan_half);
        if dir.y >= 0.0 {
            return None;
        }
        let hit = self.eye + dir * (-self.eye.y / dir.y);
        let half = OCEAN_SIZE / 2.0;
        (hit.x.abs() <= half && hit.z.abs() <= half).then_some((hit.x, hit.z))
    }
}

pub const OCEAN_VERTEX_SHADER: &str = r#"
precision highp float;

attribute vec3 position;

uniform mat4 uView;
uniform mat4 uProjection;
uniform float uTimeOffset;
uniform float uPixelRatio;
uniform float uWaveElevation;
uniform float uWaveFrequency;
uniform vec2 uMouseClick;
uniform float uLastClickTime;

varying float vElevation;

void main() {
    vec4 modelPosition = vec4(position, 1.0);

    float elevation = sin(modelPosition.x * uWaveFrequency + uTimeOffset)
                    * sin(modelPosition.z * (uWaveFrequency * 0.8) + uTimeOffset * 0.8)
                    * uWaveElevation;
    elevation -= abs(sin(modelPosition.x * (uWaveFrequency * 2.5) + uTimeOffset * 2.0) * 0.1);

    float dist = distance(modelPosition.xz, uMouseClick);
    float timeSinceClick = uTimeOffset - uLastClickTime;
    float ripple = sin(dist * 5.0 - timeSinceClick * 10.0) * exp(-dist * 0.5) * exp(-timeSinceClick * 1.5);
    if (timeSinceClick < 5.0 && timeSinceClick >= 0.0) {
        elevation += ripple * 0.3;
    }

    modelPosition.y += elevation;
    vElevation = elevation;

    vec4 viewPosition = uView * modelPosition;
    gl_Position = uProjection * viewPosition;

    gl_PointSize = 6.0 * uPixelRatio;
    gl_PointSize *= (1.0 / -viewPosition.z);
}
"#;

pub const OCEAN_FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform vec3 uColorStart;
uniform vec3 uColorEnd;
uniform float uAlphaBoost;

varying float vElevation;

void main() {
    // soft round particle
    float distanceToCenter = distance(gl_PointCoord, vec2(0.5));
    float strength = 0.05 / distanceToCenter - 0.1;
    if (strength < 0.0) discard;

    float mixStrength = (vElevation + 0.25) * 1.5;
    vec3 color = mix(uColorStart, uColorEnd, mixStrength);
    // uniforms are linear, the canvas is sRGB
    gl_FragColor = vec4(pow(color, vec3(1.0 / 2.2)), strength * uAlphaBoost);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_theme_targets() {
        let light = OceanTargets::for_theme(ResolvedTheme::Light, Palette::default());
        assert_eq!(light.blending, Blending::Normal);
        assert_eq!(light.alpha_boost, 4.0);
        assert_eq!(light.speed, 0.55);

        let dark = OceanTargets::for_theme(ResolvedTheme::Dark, Palette::default());
        assert_eq!(dark.blending, Blending::Additive);
        assert_eq!(dark.frequency, 1.5);
        assert_eq!(dark.elevation, 0.6);
    }

    #[test]
    fn test_palette_falls_back() {
        let palette = Palette::from_css("", "not a colour", "0 0 0");
        assert_eq!(palette.lush, Palette::default().lush);
        assert_eq!(palette.breeze, Palette::default().breeze);
        assert_eq!(palette.background, Rgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_step_eases_towards_targets() {
        let mut state = OceanState::default();
        let targets = OceanTargets::for_theme(ResolvedTheme::Light, Palette::default());
        state.step(1.0 / 60.0, &targets);
        assert!(state.speed < 0.75 && state.speed > 0.55);
        assert!(close(state.speed, 0.75 + (0.55 - 0.75) * 0.025));
        assert!(state.alpha_boost > 1.5 && state.alpha_boost < 4.0);

        for _ in 0..2000 {
            state.step(1.0 / 60.0, &targets);
        }
        assert!(close(state.speed, 0.55));
        assert!(close(state.elevation, 0.9));
        assert!(close(state.frequency, 1.0));
        assert!(close(state.alpha_boost, 4.0));
    }

    #[test]
    fn test_time_offset_never_runs_backwards() {
        let mut state = OceanState::default();
        let mut last = state.time_offset;
        for (i, theme) in [ResolvedTheme::Dark, ResolvedTheme::Light]
            .iter()
            .cycle()
            .take(20)
            .enumerate()
        {
            let targets = OceanTargets::for_theme(*theme, Palette::default());
            // a stalled tab can report a negative delta
            let delta = if i == 5 { -1.0 } else { 0.016 };
            state.step(delta, &targets);
            assert!(state.time_offset >= last);
            last = state.time_offset;
        }
    }

    #[test]
    fn test_ripple_window() {
        let mut state = OceanState::default();
        state.time_offset = 10.0;
        state.click(1.0, 1.0);
        state.time_offset = 10.05;
        let rippled = state.wave_elevation(1.0, 1.0);
        let mut no_click = state;
        no_click.last_click_time = -10.0;
        assert!((rippled - no_click.wave_elevation(1.0, 1.0)).abs() > 1e-4);

        // long after the click the surface is back to plain swell
        state.time_offset = 10.0 + RIPPLE_LIFETIME + 0.1;
        let mut reference = state;
        reference.last_click_time = -10.0;
        assert_eq!(state.wave_elevation(1.0, 1.0), reference.wave_elevation(1.0, 1.0));
    }

    #[test]
    fn test_grid_layout() {
        let grid = PlaneGrid::new(12.0, 12.0, 4, 2);
        assert_eq!(grid.vertex_count(), 5 * 3);
        let p = grid.positions();
        assert_eq!(&p[0..3], &[-6.0, 0.0, -6.0]);
        let last = grid.vertex_count() - 1;
        assert_eq!(&p[last * 3..], &[6.0, 0.0, 6.0]);
        assert!(p.chunks(3).all(|v| v[1] == 0.0));

        assert_eq!(PlaneGrid::ocean().vertex_count(), 257 * 129);
    }

    #[test]
    fn test_view_matrix_places_camera_at_origin() {
        let cam = Camera::default();
        let view = cam.view();
        let eye = view.transform_point(&Point3::new(0.0, 2.0, 4.0));
        assert!(close(eye.x, 0.0) && close(eye.y, 0.0) && close(eye.z, 0.0));
        let target = view.transform_point(&Point3::origin());
        let dist = (4.0f32 + 16.0).sqrt();
        assert!(close(target.x, 0.0) && close(target.y, 0.0));
        assert!(close(target.z, -dist));
    }

    #[test]
    fn test_projection_depth_range() {
        let proj = Camera::default().projection(1.5);
        let near = proj.transform_point(&Point3::new(0.0, 0.0, -0.1));
        let far = proj.transform_point(&Point3::new(0.0, 0.0, -100.0));
        assert!(close(near.z, -1.0));
        assert!((far.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_projection_survives_empty_canvas() {
        let proj = Camera::default().projection(0.0);
        assert!(proj.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_click_ray() {
        let cam = Camera::default();
        let (x, z) = cam.ray_to_ground(0.0, 0.0, 1.0).unwrap();
        assert!(close(x, 0.0) && close(z, 0.0));

        // the top of the screen looks just above the horizon
        assert!(cam.ray_to_ground(0.0, 1.0, 1.0).is_none());

        // lower on screen lands closer to the camera; right lands right
        let (x, z) = cam.ray_to_ground(0.3, -0.5, 1.0).unwrap();
        assert!(x > 0.0);
        assert!(z > 0.0);

        // a ray that hits the plane far outside the hitbox is ignored
        assert!(cam.ray_to_ground(0.0, 0.55, 1.0).is_none());
    }

    #[test]
    fn test_projected_click_matches_ray() {
        let cam = Camera::default();
        let aspect = 16.0 / 9.0;
        let vp = cam.projection(aspect) * cam.view();
        let ndc = vp.transform_point(&Point3::new(1.5, 0.0, 2.0));
        let (ndc_x, ndc_y) = (ndc.x, ndc.y);
        let (x, z) = cam.ray_to_ground(ndc_x, ndc_y, aspect).unwrap();
        assert!((x - 1.5).abs() < 1e-3 && (z - 2.0).abs() < 1e-3);
    }
}
