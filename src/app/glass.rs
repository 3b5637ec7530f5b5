use leptos::prelude::*;

/// How frosted the glass gets at full alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlassIntensity {
    /// clear water
    Sm,
    /// frosted glass
    #[default]
    Md,
    /// deep ice
    Lg,
}

impl GlassIntensity {
    pub fn max_blur(self) -> f64 {
        match self {
            GlassIntensity::Sm => 4.0,
            GlassIntensity::Md => 12.0,
            GlassIntensity::Lg => 24.0,
        }
    }
}

/// Inline styles for a card at a given visibility. Every effect scales
/// linearly with `alpha`, so at 0 nothing of the glass is left.
#[derive(Debug, Clone, PartialEq)]
pub struct GlassStyle {
    pub background: String,
    pub border_color: String,
    pub box_shadow: String,
    pub backdrop_filter: String,
    pub highlight: String,
}

impl GlassStyle {
    pub fn new(intensity: GlassIntensity, alpha: f64) -> Self {
        let a = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let lush = 15.0 * a;
        let breeze = 10.0 * a;
        let floor = 2.0 * a;
        Self {
            background: format!(
                "linear-gradient(to bottom right, \
                 color-mix(in srgb, var(--color-lush-500) {lush:.2}%, transparent), \
                 color-mix(in srgb, var(--color-breeze-500) {breeze:.2}%, transparent), \
                 color-mix(in srgb, var(--color-breeze-500) {floor:.2}%, transparent))"
            ),
            border_color: format!(
                "color-mix(in srgb, var(--color-lush-400) {:.2}%, transparent)",
                20.0 * a
            ),
            box_shadow: format!("0 8px 32px 0 rgba(0,0,0,{:.3})", 0.3 * a),
            backdrop_filter: format!("blur({:.2}px)", intensity.max_blur() * a),
            highlight: format!(
                "radial-gradient(circle at top left, rgba(255,255,255,{:.3}), transparent 70%)",
                0.08 * a
            ),
        }
    }

    pub fn container_css(&self) -> String {
        format!(
            "background: {}; border-color: {}; box-shadow: {}; backdrop-filter: {f}; -webkit-backdrop-filter: {f};",
            self.background,
            self.border_color,
            self.box_shadow,
            f = self.backdrop_filter,
        )
    }
}

/// A frosted card tinted with the ocean palette. Pass a scroll-driven
/// `alpha` to fade the whole effect in and out.
#[component]
pub fn LiquidGlassCard(
    children: Children,
    #[prop(optional)] intensity: GlassIntensity,
    #[prop(into, default = Signal::stored(1.0))] alpha: Signal<f64>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] content_class: String,
    /// Extra inline style, appended after the glass styles.
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    let glass = Memo::new(move |_| GlassStyle::new(intensity, alpha.get()));
    view! {
        <div
            class=format!("relative overflow-hidden rounded-3xl border border-solid {class}")
            style=move || format!("{} {}", glass.with(GlassStyle::container_css), style.get().unwrap_or_default())
        >
            <div
                class="pointer-events-none absolute inset-0"
                aria-hidden="true"
                style=move || glass.with(|g| format!("background: {};", g.highlight))
            ></div>
            <div class=format!("relative z-10 p-8 {content_class}")>{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_alpha() {
        let style = GlassStyle::new(GlassIntensity::Lg, 1.0);
        assert_eq!(style.backdrop_filter, "blur(24.00px)");
        assert_eq!(style.box_shadow, "0 8px 32px 0 rgba(0,0,0,0.300)");
        assert!(style.background.contains("var(--color-lush-500) 15.00%"));
        assert!(style.background.contains("var(--color-breeze-500) 10.00%"));
        assert!(style.background.contains("var(--color-breeze-500) 2.00%"));
        assert!(style.border_color.contains("20.00%"));
        assert!(style.highlight.contains("0.080"));
    }

    #[test]
    fn test_zero_alpha_is_invisible() {
        let style = GlassStyle::new(GlassIntensity::Md, 0.0);
        assert_eq!(style.backdrop_filter, "blur(0.00px)");
        assert!(style.background.contains("var(--color-lush-500) 0.00%"));
        assert_eq!(style.box_shadow, "0 8px 32px 0 rgba(0,0,0,0.000)");
    }

    #[test]
    fn test_alpha_scales_and_clamps() {
        assert_eq!(
            GlassStyle::new(GlassIntensity::Md, 0.5).backdrop_filter,
            "blur(6.00px)"
        );
        assert_eq!(
            GlassStyle::new(GlassIntensity::Sm, 3.0),
            GlassStyle::new(GlassIntensity::Sm, 1.0)
        );
        assert_eq!(
            GlassStyle::new(GlassIntensity::Sm, f64::NAN),
            GlassStyle::new(GlassIntensity::Sm, 0.0)
        );
    }

    #[test]
    fn test_container_css_repeats_filter_for_webkit() {
        let css = GlassStyle::new(GlassIntensity::Sm, 1.0).container_css();
        assert_eq!(css.matches("blur(4.00px)").count(), 2);
    }
}
