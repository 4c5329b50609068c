//! Entrance animations.
//!
//! Elements start hidden (faded out, shifted down 20px) and slide into
//! place once, either right after mounting or the first time they scroll
//! into the viewport. The motion itself is a CSS transition on `.reveal`;
//! this module only decides *when* the `revealed` class goes on.

use leptos::html;
use leptos::prelude::*;

use crate::geometry::element_bounds;
use crate::scroll::ScrollSubscription;

/// Timing of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    /// Extra delay per sibling index.
    pub stagger_ms: u32,
}

impl Transition {
    /// Profile block on first paint.
    pub const HERO: Transition = Transition {
        duration_ms: 800,
        stagger_ms: 0,
    };

    /// Cards in a list.
    pub const CARD: Transition = Transition {
        duration_ms: 500,
        stagger_ms: 100,
    };

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger_ms.saturating_mul(index)
    }

    /// Inline style for the element at `index`.
    pub fn style(&self, index: usize) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            self.duration_ms,
            self.delay_ms(index)
        )
    }
}

/// When a reveal fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Next animation frame after mount.
    Mount,
    /// First time any part of the element is inside the viewport.
    #[default]
    InView,
}

pub fn reveal_class(extra: &str, revealed: bool) -> String {
    let mut class = String::from("reveal");
    if revealed {
        class.push_str(" revealed");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// One-shot fade-up wrapper.
#[component]
pub fn Reveal(
    #[prop(optional)] trigger: Trigger,
    #[prop(default = Transition::CARD)] transition: Transition,
    /// Position among siblings, drives the stagger delay.
    #[prop(default = 0)]
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    match trigger {
        Trigger::Mount => request_animation_frame(move || set_revealed.set(true)),
        Trigger::InView => {
            // True once revealed (or disposed): the listener is done.
            let check = move || {
                match revealed.try_get_untracked() {
                    Some(false) => {}
                    _ => return true,
                }
                let Some(element) = node.get_untracked() else {
                    return false;
                };
                if element_bounds(&element).enters_viewport(viewport_height()) {
                    set_revealed.set(true);
                    return true;
                }
                false
            };
            // Elements already on screen at load reveal without a scroll.
            request_animation_frame(move || {
                check();
            });
            ScrollSubscription::until(check).scoped();
        }
    }

    view! {
        <div
            node_ref=node
            class=move || reveal_class(&class, revealed.get())
            style=transition.style(index)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn card_delay_staggers_by_index() {
        assert_eq!(Transition::CARD.delay_ms(0), 0);
        assert_eq!(Transition::CARD.delay_ms(3), 300);
        assert_eq!(Transition::HERO.delay_ms(5), 0);
    }

    #[test]
    fn style_carries_duration_and_delay() {
        assert_eq!(
            Transition::CARD.style(2),
            "transition-duration: 500ms; transition-delay: 200ms;"
        );
        assert_eq!(
            Transition::HERO.style(0),
            "transition-duration: 800ms; transition-delay: 0ms;"
        );
    }

    #[test]
    fn delay_saturates_instead_of_overflowing() {
        assert_eq!(Transition::CARD.delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn reveal_class_variants() {
        assert_eq!(reveal_class("", false), "reveal");
        assert_eq!(reveal_class("", true), "reveal revealed");
        assert_eq!(reveal_class("card", true), "reveal revealed card");
    }

    #[test]
    fn in_view_is_the_default_trigger() {
        assert_eq!(Trigger::default(), Trigger::InView);
    }
}
