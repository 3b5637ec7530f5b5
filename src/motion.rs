use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("a range needs at least two breakpoints")]
    TooFewPoints,
    #[error("{inputs} input breakpoints but {outputs} output values")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("input breakpoints must be strictly increasing (index {0})")]
    NotIncreasing(usize),
    #[error("breakpoints and outputs must be finite")]
    NotFinite,
}

/// Progress of an element scrolling through the viewport.
///
/// `0.0` when the element's top edge meets the bottom of the viewport and
/// `1.0` once its bottom edge has left through the top. `top` is the
/// element's top relative to the viewport, as reported by
/// `getBoundingClientRect`.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if !travel.is_finite() || travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear mapping from an input range onto output values.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMapper {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl RangeMapper {
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(MotionError::TooFewPoints);
        }
        if inputs.iter().chain(outputs).any(|v| !v.is_finite()) {
            return Err(MotionError::NotFinite);
        }
        if let Some(i) = inputs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MotionError::NotIncreasing(i + 1));
        }
        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        })
    }

    /// Values outside the breakpoints clamp to the first/last output.
    pub fn map(&self, x: f64) -> f64 {
        let last = self.inputs.len() - 1;
        if x.is_nan() || x <= self.inputs[0] {
            return self.outputs[0];
        }
        if x >= self.inputs[last] {
            return self.outputs[last];
        }
        // first breakpoint strictly greater than x; always in 1..=last here
        let hi = self.inputs.partition_point(|&b| b <= x);
        let lo = hi - 1;
        let span = self.inputs[hi] - self.inputs[lo];
        let t = (x - self.inputs[lo]) / span;
        self.outputs[lo] + (self.outputs[hi] - self.outputs[lo]) * t
    }
}

/// One sampled set of animated style values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for MotionFrame {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

impl MotionFrame {
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px) scale({:.3});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// Several independent mappers all driven by the same scroll progress.
///
/// Any channel left as `None` keeps its [`MotionFrame::default`] value.
#[derive(Debug, Clone, Default)]
pub struct ScrollTimeline {
    opacity: Option<RangeMapper>,
    translate_y: Option<RangeMapper>,
    scale: Option<RangeMapper>,
}

impl ScrollTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        self.opacity = Some(RangeMapper::new(inputs, outputs)?);
        Ok(self)
    }

    pub fn translate_y(mut self, inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        self.translate_y = Some(RangeMapper::new(inputs, outputs)?);
        Ok(self)
    }

    pub fn scale(mut self, inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        self.scale = Some(RangeMapper::new(inputs, outputs)?);
        Ok(self)
    }

    pub fn sample(&self, progress: f64) -> MotionFrame {
        let base = MotionFrame::default();
        MotionFrame {
            opacity: self.opacity.as_ref().map_or(base.opacity, |m| m.map(progress)),
            translate_y: self
                .translate_y
                .as_ref()
                .map_or(base.translate_y, |m| m.map(progress)),
            scale: self.scale.as_ref().map_or(base.scale, |m| m.map(progress)),
        }
    }

    /// Home page hero: stays put while the page is at rest, then fades,
    /// rises and shrinks as it scrolls out of view.
    pub fn hero_exit() -> Self {
        Self::from_tables(
            (&[0.5, 0.75, 0.95], &[1.0, 0.6, 0.0]),
            (&[0.5, 1.0], &[0.0, -120.0]),
            (&[0.5, 1.0], &[1.0, 0.85]),
        )
    }

    /// Glass cards: alpha climbs while the card enters, holds across the
    /// middle of the viewport and drains as it leaves.
    pub fn card_reveal() -> Self {
        Self::from_tables(
            (&[0.0, 0.25, 0.75, 1.0], &[0.0, 1.0, 1.0, 0.0]),
            (&[0.0, 0.25, 0.75, 1.0], &[48.0, 0.0, 0.0, -48.0]),
            (&[0.0, 0.25, 0.75, 1.0], &[0.95, 1.0, 1.0, 0.95]),
        )
    }

    // Tables passed here are compile-time constants covered by tests.
    fn from_tables(
        opacity: (&[f64], &[f64]),
        translate_y: (&[f64], &[f64]),
        scale: (&[f64], &[f64]),
    ) -> Self {
        let build = |(i, o): (&[f64], &[f64])| RangeMapper::new(i, o).ok();
        Self {
            opacity: build(opacity),
            translate_y: build(translate_y),
            scale: build(scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_bounds() {
        // element still below the fold
        assert_eq!(scroll_progress(900.0, 200.0, 800.0), 0.0);
        // top edge exactly at the viewport bottom
        assert_eq!(scroll_progress(800.0, 200.0, 800.0), 0.0);
        // bottom edge has left through the top
        assert_eq!(scroll_progress(-200.0, 200.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-500.0, 200.0, 800.0), 1.0);
        // halfway through the 1000px of travel
        assert!(close(scroll_progress(300.0, 200.0, 800.0), 0.5));
    }

    #[test]
    fn test_progress_degenerate() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(10.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn test_progress_monotonic() {
        let mut last = -1.0;
        for step in 0..=100 {
            let top = 800.0 - step as f64 * 10.0;
            let p = scroll_progress(top, 200.0, 800.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_mapper_validation() {
        assert_eq!(
            RangeMapper::new(&[0.0], &[1.0]),
            Err(MotionError::TooFewPoints)
        );
        assert_eq!(
            RangeMapper::new(&[0.0, 1.0], &[1.0]),
            Err(MotionError::LengthMismatch {
                inputs: 2,
                outputs: 1
            })
        );
        assert_eq!(
            RangeMapper::new(&[0.0, 0.5, 0.5], &[0.0, 1.0, 2.0]),
            Err(MotionError::NotIncreasing(2))
        );
        assert_eq!(
            RangeMapper::new(&[0.0, f64::INFINITY], &[0.0, 1.0]),
            Err(MotionError::NotFinite)
        );
    }

    #[test]
    fn test_mapper_interpolates() {
        let m = RangeMapper::new(&[0.0, 0.5, 1.0], &[0.0, 100.0, 50.0]).unwrap();
        assert!(close(m.map(0.25), 50.0));
        assert!(close(m.map(0.5), 100.0));
        assert!(close(m.map(0.75), 75.0));
    }

    #[test]
    fn test_mapper_clamps() {
        let m = RangeMapper::new(&[0.2, 0.8], &[1.0, 0.0]).unwrap();
        assert_eq!(m.map(-3.0), 1.0);
        assert_eq!(m.map(0.0), 1.0);
        assert_eq!(m.map(0.9), 0.0);
        assert_eq!(m.map(f64::NAN), 1.0);
    }

    #[test]
    fn test_timeline_channels_independent() {
        let tl = ScrollTimeline::new()
            .opacity(&[0.0, 1.0], &[1.0, 0.0])
            .unwrap();
        let frame = tl.sample(0.5);
        assert!(close(frame.opacity, 0.5));
        assert_eq!(frame.translate_y, 0.0);
        assert_eq!(frame.scale, 1.0);
    }

    #[test]
    fn test_builtin_timelines() {
        let hero = ScrollTimeline::hero_exit();
        assert_eq!(hero.sample(0.0), MotionFrame::default());
        let gone = hero.sample(1.0);
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.translate_y, -120.0);
        assert!(close(gone.scale, 0.85));

        let card = ScrollTimeline::card_reveal();
        assert_eq!(card.sample(0.0).opacity, 0.0);
        assert_eq!(card.sample(0.5).opacity, 1.0);
        assert_eq!(card.sample(0.5).translate_y, 0.0);
        assert_eq!(card.sample(1.0).opacity, 0.0);
        assert!(card.opacity.is_some() && card.translate_y.is_some() && card.scale.is_some());
    }

    #[test]
    fn test_frame_style() {
        let style = MotionFrame {
            opacity: 0.5,
            translate_y: -12.0,
            scale: 0.9,
        }
        .to_style();
        assert_eq!(
            style,
            "opacity: 0.500; transform: translateY(-12.0px) scale(0.900);"
        );
    }
}
