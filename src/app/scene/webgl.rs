use std::collections::HashMap;

use leptos::{ev::PointerEvent, html, prelude::*};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

use crate::app::theme::use_theme;
use crate::color::Rgb;
use crate::electric::{
    electric_palette, ElectricState, ELECTRIC_FRAGMENT_SHADER, ELECTRIC_VERTEX_SHADER,
    FULLSCREEN_QUAD,
};
use crate::ocean::{
    Blending, Camera, Mat4, OceanState, OceanTargets, Palette, PlaneGrid, OCEAN_FRAGMENT_SHADER,
    OCEAN_VERTEX_SHADER,
};
use crate::theme::ResolvedTheme;

use super::{buffer_size, to_ndc, FrameInput, Scene, SceneError, SceneKind};

// longest step the simulation takes, e.g. after the tab was hidden
const MAX_DELTA: f64 = 0.1;

fn context(canvas: &HtmlCanvasElement) -> Result<GL, SceneError> {
    canvas
        .get_context("webgl")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        .ok_or(SceneError::Unsupported)
}

fn compile_shader(gl: &GL, src: &str, shader_type: u32) -> Result<WebGlShader, SceneError> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or(SceneError::Resource("shader"))?;
    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);
    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        return Err(SceneError::Compile(log));
    }
    Ok(shader)
}

/// A linked program, its shaders and the uniform locations it was asked
/// for. Everything is deleted on drop.
struct Program {
    gl: GL,
    program: WebGlProgram,
    shaders: [WebGlShader; 2],
    uniforms: HashMap<&'static str, WebGlUniformLocation>,
}

impl Program {
    fn link(
        gl: &GL,
        vert_src: &str,
        frag_src: &str,
        uniforms: &[&'static str],
    ) -> Result<Self, SceneError> {
        let vert = compile_shader(gl, vert_src, GL::VERTEX_SHADER)?;
        let frag = match compile_shader(gl, frag_src, GL::FRAGMENT_SHADER) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(Some(&vert));
                return Err(e);
            }
        };
        let Some(program) = gl.create_program() else {
            gl.delete_shader(Some(&vert));
            gl.delete_shader(Some(&frag));
            return Err(SceneError::Resource("program"));
        };
        // from here on Drop cleans up
        let mut linked = Self {
            gl: gl.clone(),
            program,
            shaders: [vert, frag],
            uniforms: HashMap::new(),
        };
        for shader in &linked.shaders {
            gl.attach_shader(&linked.program, shader);
        }
        gl.link_program(&linked.program);
        if !gl
            .get_program_parameter(&linked.program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            return Err(SceneError::Link(
                gl.get_program_info_log(&linked.program).unwrap_or_default(),
            ));
        }

        for &name in uniforms {
            // unused uniforms are compiled out and have no location
            match gl.get_uniform_location(&linked.program, name) {
                Some(loc) => {
                    linked.uniforms.insert(name, loc);
                }
                None => log::debug!("uniform {name} is inactive"),
            }
        }
        Ok(linked)
    }

    fn attribute(&self, name: &'static str) -> Result<u32, SceneError> {
        u32::try_from(self.gl.get_attrib_location(&self.program, name))
            .map_err(|_| SceneError::MissingAttribute(name))
    }

    fn use_program(&self) {
        self.gl.use_program(Some(&self.program));
    }

    fn set_f32(&self, name: &str, v: f32) {
        self.gl.uniform1f(self.uniforms.get(name), v);
    }

    fn set_vec2(&self, name: &str, v: [f32; 2]) {
        self.gl.uniform2f(self.uniforms.get(name), v[0], v[1]);
    }

    fn set_rgb(&self, name: &str, c: Rgb) {
        self.gl.uniform3f(self.uniforms.get(name), c.r, c.g, c.b);
    }

    fn set_mat4(&self, name: &str, m: &Mat4) {
        self.gl
            .uniform_matrix4fv_with_f32_array(self.uniforms.get(name), false, m.as_slice());
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        for shader in &self.shaders {
            self.gl.detach_shader(&self.program, shader);
            self.gl.delete_shader(Some(shader));
        }
        self.gl.delete_program(Some(&self.program));
    }
}

/// Static vertex data in an `ARRAY_BUFFER`.
struct Buffer {
    gl: GL,
    buffer: WebGlBuffer,
}

impl Buffer {
    fn new(gl: &GL, data: &[f32]) -> Result<Self, SceneError> {
        let buffer = gl
            .create_buffer()
            .ok_or(SceneError::Resource("vertex buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let array = js_sys::Float32Array::from(data);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Ok(Self {
            gl: gl.clone(),
            buffer,
        })
    }

    fn bind_attribute(&self, index: u32, components: i32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        self.gl
            .vertex_attrib_pointer_with_i32(index, components, GL::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(index);
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
    }
}

const OCEAN_UNIFORMS: &[&str] = &[
    "uView",
    "uProjection",
    "uTimeOffset",
    "uPixelRatio",
    "uWaveElevation",
    "uWaveFrequency",
    "uMouseClick",
    "uLastClickTime",
    "uColorStart",
    "uColorEnd",
    "uAlphaBoost",
];

pub struct OceanScene {
    gl: GL,
    program: Program,
    positions: Buffer,
    position_attr: u32,
    vertex_count: i32,
    camera: Camera,
    state: OceanState,
    aspect: f32,
    pixel_ratio: f32,
}

impl OceanScene {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SceneError> {
        let gl = context(canvas)?;
        let program = Program::link(
            &gl,
            OCEAN_VERTEX_SHADER,
            OCEAN_FRAGMENT_SHADER,
            OCEAN_UNIFORMS,
        )?;
        let position_attr = program.attribute("position")?;
        let grid = PlaneGrid::ocean();
        let positions = Buffer::new(&gl, grid.positions())?;
        Ok(Self {
            gl,
            program,
            positions,
            position_attr,
            vertex_count: grid.vertex_count() as i32,
            camera: Camera::default(),
            state: OceanState::default(),
            aspect: 1.0,
            pixel_ratio: window().device_pixel_ratio().clamp(1.0, 2.0) as f32,
        })
    }
}

impl Scene for OceanScene {
    fn resize(&mut self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.aspect = width as f32 / height.max(1) as f32;
    }

    fn update(&mut self, frame: &FrameInput) {
        let targets = OceanTargets::for_theme(frame.theme, frame.palette);
        self.state.step(frame.delta, &targets);

        let gl = &self.gl;
        let bg = self.state.background.to_srgb();
        gl.clear_color(bg.r, bg.g, bg.b, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.enable(GL::BLEND);
        match targets.blending {
            Blending::Additive => gl.blend_func(GL::SRC_ALPHA, GL::ONE),
            Blending::Normal => gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA),
        }

        let p = &self.program;
        p.use_program();
        p.set_mat4("uView", &self.camera.view());
        p.set_mat4("uProjection", &self.camera.projection(self.aspect));
        p.set_f32("uTimeOffset", self.state.time_offset);
        p.set_f32("uPixelRatio", self.pixel_ratio);
        p.set_f32("uWaveElevation", self.state.elevation);
        p.set_f32("uWaveFrequency", self.state.frequency);
        p.set_vec2("uMouseClick", self.state.click);
        p.set_f32("uLastClickTime", self.state.last_click_time);
        p.set_rgb("uColorStart", self.state.color_start);
        p.set_rgb("uColorEnd", self.state.color_end);
        p.set_f32("uAlphaBoost", self.state.alpha_boost);

        self.positions.bind_attribute(self.position_attr, 3);
        gl.draw_arrays(GL::POINTS, 0, self.vertex_count);
    }

    fn pointer_down(&mut self, ndc_x: f32, ndc_y: f32) {
        if let Some((x, z)) = self.camera.ray_to_ground(ndc_x, ndc_y, self.aspect) {
            log::debug!("ripple at ({x:.2}, {z:.2})");
            self.state.click(x, z);
        }
    }
}

const ELECTRIC_UNIFORMS: &[&str] = &["uTime", "uColorLush", "uColorBreeze", "uColorBg"];

pub struct ElectricScene {
    gl: GL,
    program: Program,
    quad: Buffer,
    position_attr: u32,
    state: ElectricState,
}

impl ElectricScene {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SceneError> {
        let gl = context(canvas)?;
        let program = Program::link(
            &gl,
            ELECTRIC_VERTEX_SHADER,
            ELECTRIC_FRAGMENT_SHADER,
            ELECTRIC_UNIFORMS,
        )?;
        let position_attr = program.attribute("position")?;
        let quad = Buffer::new(&gl, &FULLSCREEN_QUAD)?;
        Ok(Self {
            gl,
            program,
            quad,
            position_attr,
            state: ElectricState::default(),
        })
    }
}

impl Scene for ElectricScene {
    fn resize(&mut self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn update(&mut self, frame: &FrameInput) {
        self.state.step(frame.elapsed, &frame.palette);

        let p = &self.program;
        p.use_program();
        p.set_f32("uTime", self.state.time);
        p.set_rgb("uColorLush", self.state.lush);
        p.set_rgb("uColorBreeze", self.state.breeze);
        p.set_rgb("uColorBg", self.state.background);

        self.quad.bind_attribute(self.position_attr, 2);
        self.gl
            .draw_arrays(GL::TRIANGLES, 0, (FULLSCREEN_QUAD.len() / 2) as i32);
    }
}

fn css_vars(kind: SceneKind) -> [&'static str; 3] {
    match kind {
        SceneKind::Ocean => ["--shader-lush", "--shader-breeze", "--shader-bg"],
        SceneKind::Electric => ["--electric-lush", "--electric-breeze", "--electric-bg"],
    }
}

/// Reads the scene colours off the root element's computed style.
fn read_palette(kind: SceneKind) -> Palette {
    let [lush, breeze, bg] = document()
        .document_element()
        .and_then(|root| window().get_computed_style(&root).ok().flatten())
        .map(|style| css_vars(kind).map(|name| style.get_property_value(name).unwrap_or_default()))
        .unwrap_or_default();
    match kind {
        SceneKind::Ocean => Palette::from_css(&lush, &breeze, &bg),
        SceneKind::Electric => electric_palette(&lush, &breeze, &bg),
    }
}

fn create(kind: SceneKind, canvas: &HtmlCanvasElement) -> Result<Box<dyn Scene>, SceneError> {
    Ok(match kind {
        SceneKind::Ocean => Box::new(OceanScene::new(canvas)?),
        SceneKind::Electric => Box::new(ElectricScene::new(canvas)?),
    })
}

/// Starts `kind` on the canvas once it mounts and drives it every animation
/// frame. Returns the canvas' pointer-down handler.
pub fn mount(canvas_ref: NodeRef<html::Canvas>, kind: SceneKind) -> impl Fn(PointerEvent) + 'static {
    let theme = use_theme();
    let scene = StoredValue::new_local(None::<Box<dyn Scene>>);
    let elapsed = StoredValue::new(0.0_f64);
    let size = StoredValue::new((0_u32, 0_u32));
    let palette = StoredValue::new(None::<(ResolvedTheme, Palette)>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match create(kind, &canvas) {
            Ok(created) => {
                log::debug!("{kind:?} scene started");
                scene.set_value(Some(created));
                // force a resize on the next frame
                size.set_value((0, 0));
            }
            Err(e) => log::warn!("{kind:?} background disabled: {e}"),
        }
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };

        // colours come from css, which only changes with the theme
        let resolved = theme.resolved.get_untracked();
        let colours = match palette.get_value() {
            Some((t, p)) if t == resolved => p,
            _ => {
                let p = read_palette(kind);
                palette.set_value(Some((resolved, p)));
                p
            }
        };

        let delta = (args.delta / 1000.0).clamp(0.0, MAX_DELTA);
        elapsed.update_value(|e| *e += delta);

        let wanted = buffer_size(
            canvas.client_width() as f64,
            canvas.client_height() as f64,
            window().device_pixel_ratio(),
        );
        let resized = size.get_value() != wanted;
        if resized {
            canvas.set_width(wanted.0);
            canvas.set_height(wanted.1);
            size.set_value(wanted);
        }

        let frame = FrameInput {
            delta: delta as f32,
            elapsed: elapsed.get_value() as f32,
            theme: resolved,
            palette: colours,
        };
        scene.update_value(|s| {
            if let Some(s) = s.as_mut() {
                if resized {
                    s.resize(wanted.0, wanted.1);
                }
                s.update(&frame);
            }
        });
    });

    on_cleanup(move || {
        if scene.try_update_value(|s| s.take()).flatten().is_some() {
            log::debug!("{kind:?} scene disposed");
        }
    });

    move |ev: PointerEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Some((x, y)) = to_ndc(
            ev.offset_x() as f64,
            ev.offset_y() as f64,
            canvas.client_width() as f64,
            canvas.client_height() as f64,
        ) else {
            return;
        };
        scene.update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.pointer_down(x, y);
            }
        });
    }
}
