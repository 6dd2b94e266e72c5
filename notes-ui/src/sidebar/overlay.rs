//! Mobile overlay: timed enter/leave state machine and the overlay component

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayPhase {
    pub fn is_mounted(self) -> bool {
        self != OverlayPhase::Closed
    }

    /// Rows inside the panel accept activation
    pub fn is_interactive(self) -> bool {
        matches!(self, OverlayPhase::Opening | OverlayPhase::Open)
    }

    pub fn animation_class(self) -> &'static str {
        match self {
            OverlayPhase::Opening => "is-entering",
            OverlayPhase::Closing => "is-leaving",
            OverlayPhase::Open | OverlayPhase::Closed => "",
        }
    }
}

/// Keys that dismiss the overlay or the confirm dialog
pub fn is_dismiss_key(key: &Key) -> bool {
    *key == Key::Escape
}

/// Move keyboard focus into a freshly mounted overlay or dialog so its
/// key handler sees Escape.
pub async fn focus_on_mount(event: MountedEvent) {
    if let Err(e) = event.set_focus(true).await {
        dioxus_logger::tracing::debug!("Could not focus overlay root: {:?}", e);
    }
}

/// Overlay phase plus an epoch that invalidates timers from earlier transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayTransition {
    pub phase: OverlayPhase,
    pub epoch: u64,
}

impl OverlayTransition {
    /// Follow the externally owned visibility flag.
    ///
    /// Returns the epoch of the transition that was started, or `None` when
    /// the overlay is already heading where `visible` points.
    pub fn set_visible(&mut self, visible: bool) -> Option<u64> {
        let next = match (self.phase, visible) {
            (OverlayPhase::Closed | OverlayPhase::Closing, true) => OverlayPhase::Opening,
            (OverlayPhase::Open | OverlayPhase::Opening, false) => OverlayPhase::Closing,
            _ => return None,
        };
        self.phase = next;
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Transition timer fired. Stale epochs are ignored.
    pub fn complete(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let next = match self.phase {
            OverlayPhase::Opening => OverlayPhase::Open,
            OverlayPhase::Closing => OverlayPhase::Closed,
            _ => return false,
        };
        self.phase = next;
        true
    }
}

#[component]
pub fn MobileOverlay(
    open: bool,
    transition_ms: u32,
    on_close: Callback<()>,
    children: Element,
) -> Element {
    let mut transition = use_signal(OverlayTransition::default);

    use_effect(use_reactive((&open,), move |(open,)| {
        let Some(epoch) = transition.write().set_visible(open) else {
            return;
        };
        spawn(async move {
            TimeoutFuture::new(transition_ms).await;
            transition.write().complete(epoch);
        });
    }));

    let phase = transition().phase;
    if !phase.is_mounted() {
        return rsx! {};
    }
    let animation = phase.animation_class();
    let panel_interaction = if phase.is_interactive() {
        ""
    } else {
        "pointer-events: none;"
    };

    rsx! {
        div {
            class: "mobile-overlay",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onmounted: move |e| focus_on_mount(e),
            onkeydown: move |e| {
                if is_dismiss_key(&e.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "mobile-overlay__backdrop {animation}",
                style: "animation-duration: {transition_ms}ms;",
                onclick: move |_| on_close.call(()),
            }

            div {
                class: "mobile-overlay__frame",
                onclick: move |_| on_close.call(()),

                div {
                    class: "mobile-overlay__panel {animation}",
                    style: "animation-duration: {transition_ms}ms; {panel_interaction}",
                    onclick: move |e| e.stop_propagation(),

                    div {
                        class: "mobile-overlay__close-wrap {animation}",
                        style: "animation-duration: {transition_ms}ms;",
                        button {
                            r#type: "button",
                            class: "mobile-overlay__close",
                            onclick: move |_| on_close.call(()),
                            span { class: "sr-only", "Close sidebar" }
                            span { aria_hidden: "true", "×" }
                        }
                    }

                    {children}
                }

                // Keeps the panel narrow enough to leave room for the close button
                div { class: "mobile-overlay__spacer", aria_hidden: "true" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_through_opening() {
        let mut t = OverlayTransition::default();
        let epoch = t.set_visible(true).expect("transition starts");
        assert_eq!(t.phase, OverlayPhase::Opening);
        assert!(t.complete(epoch));
        assert_eq!(t.phase, OverlayPhase::Open);
    }

    #[test]
    fn closes_through_closing() {
        let mut t = OverlayTransition::default();
        let epoch = t.set_visible(true).unwrap();
        t.complete(epoch);

        let epoch = t.set_visible(false).expect("transition starts");
        assert_eq!(t.phase, OverlayPhase::Closing);
        assert!(!t.phase.is_interactive());
        assert!(t.phase.is_mounted());
        assert!(t.complete(epoch));
        assert_eq!(t.phase, OverlayPhase::Closed);
        assert!(!t.phase.is_mounted());
    }

    #[test]
    fn repeated_visibility_is_a_no_op() {
        let mut t = OverlayTransition::default();
        assert_eq!(t.set_visible(false), None);
        t.set_visible(true);
        assert_eq!(t.set_visible(true), None);
        assert_eq!(t.phase, OverlayPhase::Opening);
    }

    #[test]
    fn closing_mid_open_discards_the_open_timer() {
        let mut t = OverlayTransition::default();
        let opening = t.set_visible(true).unwrap();
        let closing = t.set_visible(false).unwrap();

        assert!(!t.complete(opening));
        assert_eq!(t.phase, OverlayPhase::Closing);
        assert!(t.complete(closing));
        assert_eq!(t.phase, OverlayPhase::Closed);
    }

    #[test]
    fn reopening_mid_close_heads_back_to_open() {
        let mut t = OverlayTransition::default();
        let e = t.set_visible(true).unwrap();
        t.complete(e);
        let closing = t.set_visible(false).unwrap();
        let reopening = t.set_visible(true).unwrap();

        assert!(!t.complete(closing));
        assert!(t.complete(reopening));
        assert_eq!(t.phase, OverlayPhase::Open);
    }

    #[test]
    fn completion_in_settled_phase_is_ignored() {
        let mut t = OverlayTransition::default();
        assert!(!t.complete(t.epoch));
        assert_eq!(t.phase, OverlayPhase::Closed);
    }

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key(&Key::Escape));
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Character(" ".to_string())));
    }

    #[test]
    fn animation_classes() {
        assert_eq!(OverlayPhase::Opening.animation_class(), "is-entering");
        assert_eq!(OverlayPhase::Closing.animation_class(), "is-leaving");
        assert_eq!(OverlayPhase::Open.animation_class(), "");
    }
}
