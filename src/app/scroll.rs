use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use crate::motion::{scroll_progress, MotionFrame, ScrollTimeline};

/// How far `target` has travelled through the viewport, 0 when its top
/// meets the bottom edge and 1 when its bottom leaves the top edge.
pub fn use_scroll_progress(target: NodeRef<html::Div>) -> Signal<f64> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    let UseWindowSizeReturn {
        height: viewport, ..
    } = use_window_size();
    Signal::derive(move || scroll_progress(top.get(), height.get(), viewport.get()))
}

pub fn use_scroll_motion(target: NodeRef<html::Div>, timeline: ScrollTimeline) -> Signal<MotionFrame> {
    let progress = use_scroll_progress(target);
    Signal::derive(move || timeline.sample(progress.get()))
}

/// Plays `timeline` on its children as the wrapper scrolls through the
/// viewport. Progress is read from the outer element, which is never
/// transformed, so the motion cannot feed back into its own input.
#[component]
pub fn ScrollMotion<CF, IV>(
    timeline: ScrollTimeline,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] inner_class: String,
    children: CF,
) -> impl IntoView
where
    CF: FnOnce(Signal<MotionFrame>) -> IV + Send + 'static,
    IV: IntoView + 'static,
{
    let target = NodeRef::<html::Div>::new();
    let motion = use_scroll_motion(target, timeline);

    view! {
        <div node_ref=target class=class>
            <div class=inner_class style=move || motion.get().to_style()>
                {children(motion)}
            </div>
        </div>
    }
}
