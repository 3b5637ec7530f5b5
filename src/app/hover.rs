use leptos::prelude::*;

/// One stop of the halo's radial gradient. `colour` is a palette name such
/// as `lush-500`; `None` is transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub colour: Option<&'static str>,
    pub opacity: Option<f64>,
    /// Percentage along the radius.
    pub position: u8,
}

impl GradientStop {
    const fn clear(position: u8) -> Self {
        Self {
            colour: None,
            opacity: None,
            position,
        }
    }

    const fn tinted(colour: &'static str, opacity: f64, position: u8) -> Self {
        Self {
            colour: Some(colour),
            opacity: Some(opacity),
            position,
        }
    }

    fn css(&self) -> String {
        match (self.colour, self.opacity) {
            (None, _) => format!("transparent {}%", self.position),
            (Some(c), Some(o)) => format!("rgb(var(--tw-color-{c}) / {o}) {}%", self.position),
            (Some(c), None) => format!("rgb(var(--tw-color-{c})) {}%", self.position),
        }
    }
}

/// A ring that fades in between 50% and 90% of the radius.
pub fn halo_stops(colour: &'static str) -> Vec<GradientStop> {
    vec![
        GradientStop::clear(50),
        GradientStop::tinted(colour, 0.5, 60),
        GradientStop::tinted(colour, 0.2, 80),
        GradientStop::clear(90),
    ]
}

pub fn gradient_css(stops: &[GradientStop]) -> String {
    let parts = stops.iter().map(GradientStop::css).collect::<Vec<_>>();
    format!("radial-gradient(circle, {})", parts.join(", "))
}

/// Wraps its children in a tapering halo that grows in on hover.
///
/// `gradient_stops` wins over `halo_colour`; with neither the ring is
/// `lush-500`.
#[component]
pub fn HaloRingHover(
    children: Children,
    #[prop(optional)] halo_colour: Option<&'static str>,
    #[prop(optional)] gradient_stops: Option<Vec<GradientStop>>,
    #[prop(default = "150%")] size: &'static str,
    #[prop(default = "0.5s")] transition_duration: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let stops = gradient_stops.unwrap_or_else(|| halo_stops(halo_colour.unwrap_or("lush-500")));
    let style = format!(
        "width: {size}; height: {size}; background: {}; transition-duration: {transition_duration};",
        gradient_css(&stops)
    );
    view! {
        <div class=format!("group relative inline-flex {class}")>
            <div class="z-10">{children()}</div>
            <div
                class="pointer-events-none absolute left-1/2 top-1/2 z-0 -translate-x-1/2 -translate-y-1/2 scale-75 rounded-full opacity-0 transition-all ease-out group-hover:scale-100 group-hover:opacity-100"
                style=style
            ></div>
        </div>
    }
}

/// Text that picks up the lush-to-breeze gradient on hover.
#[component]
pub fn GradientTextHover(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <span class=format!(
            "bg-gradient-to-r from-foreground to-foreground bg-clip-text transition-colors duration-300 hover:from-lush-500 hover:to-breeze-500 hover:text-transparent {class}",
        )>{children()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_halo_gradient() {
        assert_eq!(
            gradient_css(&halo_stops("lush-500")),
            "radial-gradient(circle, transparent 50%, rgb(var(--tw-color-lush-500) / 0.5) 60%, \
             rgb(var(--tw-color-lush-500) / 0.2) 80%, transparent 90%)"
        );
    }

    #[test]
    fn test_stop_without_opacity() {
        let stop = GradientStop {
            colour: Some("breeze-300"),
            opacity: None,
            position: 40,
        };
        assert_eq!(gradient_css(&[stop]), "radial-gradient(circle, rgb(var(--tw-color-breeze-300)) 40%)");
    }
}
