//! Full-bleed WebGL backgrounds.
//!
//! The canvas is rendered everywhere; the GL work only exists in the
//! hydrated bundle. Losing WebGL leaves an empty canvas, never a panic.

#[cfg(feature = "hydrate")]
mod webgl;

use leptos::{html, prelude::*};
use thiserror::Error;

use crate::ocean::Palette;
use crate::theme::ResolvedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Wave particles behind the home page.
    Ocean,
    /// Noise lightning behind the contact page.
    Electric,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("WebGL is not available")]
    Unsupported,
    #[error("couldn't compile shader: {0}")]
    Compile(String),
    #[error("couldn't link program: {0}")]
    Link(String),
    #[error("couldn't create {0}")]
    Resource(&'static str),
    #[error("shader has no attribute {0}")]
    MissingAttribute(&'static str),
}

/// Per-frame inputs shared by every scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the scene started.
    pub elapsed: f32,
    pub theme: ResolvedTheme,
    pub palette: Palette,
}

/// A scene owns its GPU resources and frees them on drop.
pub trait Scene {
    /// Called whenever the drawing buffer changes size.
    fn resize(&mut self, width: u32, height: u32);

    fn update(&mut self, frame: &FrameInput);

    /// A press at normalized device coordinates.
    fn pointer_down(&mut self, _ndc_x: f32, _ndc_y: f32) {}
}

/// Maps a point in a `width` x `height` element to normalized device
/// coordinates (y up).
pub fn to_ndc(x: f64, y: f64, width: f64, height: f64) -> Option<(f32, f32)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((
        (x / width * 2.0 - 1.0) as f32,
        (1.0 - y / height * 2.0) as f32,
    ))
}

/// Size of the drawing buffer for a css-pixel box, capped at 2x density.
pub fn buffer_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = device_pixel_ratio.clamp(1.0, 2.0);
    (
        (css_width * ratio).round().max(1.0) as u32,
        (css_height * ratio).round().max(1.0) as u32,
    )
}

#[component]
pub fn ShaderCanvas(kind: SceneKind, #[prop(optional, into)] class: String) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let on_pointer = webgl::mount(canvas_ref, kind);
    #[cfg(not(feature = "hydrate"))]
    let on_pointer = {
        tracing::trace!(?kind, "shader canvas rendered without a scene");
        move |_: leptos::ev::PointerEvent| {}
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class=format!("block h-full w-full touch-pan-y select-none {class}")
            aria-hidden="true"
            on:pointerdown=on_pointer
        ></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        assert_eq!(to_ndc(0.0, 0.0, 200.0, 100.0), Some((-1.0, 1.0)));
        assert_eq!(to_ndc(200.0, 100.0, 200.0, 100.0), Some((1.0, -1.0)));
        assert_eq!(to_ndc(100.0, 50.0, 200.0, 100.0), Some((0.0, 0.0)));
        assert_eq!(to_ndc(1.0, 1.0, 0.0, 100.0), None);
    }

    #[test]
    fn test_buffer_size_caps_density() {
        assert_eq!(buffer_size(800.0, 600.0, 1.0), (800, 600));
        assert_eq!(buffer_size(800.0, 600.0, 3.0), (1600, 1200));
        assert_eq!(buffer_size(0.0, 0.0, 0.5), (1, 1));
    }
}
