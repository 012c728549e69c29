use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{content::Anchor, scroll::Reveal};

/// Latches to true the first time `target` scrolls into view.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let (reveal, set_reveal) = signal(Reveal::default());
    let visible = use_element_visibility(target);
    Effect::new(move |_| {
        let mut r = reveal.get_untracked();
        if r.observe(visible.get()) {
            set_reveal.set(r);
        }
    });
    Signal::derive(move || reveal.get().revealed())
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal reveal-visible"
    } else {
        "reveal"
    }
}

pub fn icon(name: &str) -> String {
    format!("extra-{name}")
}

/// An anchored page section that fades in once scrolled into view.
/// Children receive the reveal state through context.
#[component]
pub fn Section(anchor: Anchor, #[prop(optional)] shaded: bool, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node_ref);
    provide_context(Revealed(revealed));
    let class = if shaded {
        "section-padding bg-dark-800/50"
    } else {
        "section-padding"
    };

    view! {
        <section id=anchor.id() class=class node_ref=node_ref>
            <div class=move || format!("max-w-7xl mx-auto {}", reveal_class(revealed.get()))>
                {children()}
            </div>
        </section>
    }
}

#[derive(Clone, Copy)]
pub struct Revealed(pub Signal<bool>);

pub fn use_revealed() -> Signal<bool> {
    use_context::<Revealed>()
        .map(|r| r.0)
        .unwrap_or_else(|| Signal::stored(true))
}

#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    accent: &'static str,
) -> impl IntoView {
    let revealed = use_revealed();
    view! {
        <div class="text-center mb-16">
            <span class="text-primary-400 font-mono text-sm md:text-base mb-4 block">
                {eyebrow}
            </span>
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                {title} " " <span class="gradient-text">{accent}</span>
            </h2>
            <div
                class="h-1 bg-gradient-to-r from-primary-500 to-purple-500 mx-auto rounded-full transition-all duration-700"
                style:width=move || if revealed.get() { "96px" } else { "0px" }
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal reveal-visible");
        assert_eq!(icon("github"), "extra-github");
    }

    #[test]
    fn test_component_icons_have_styles() {
        let styles = include_str!("../../input.css");
        for name in [
            "arrow-down",
            "arrow-up",
            "briefcase",
            "calendar",
            "download",
            "external-link",
            "github",
            "map-pin",
            "send",
        ] {
            assert!(
                styles.contains(&format!(".{} {{", icon(name))),
                "no icon rule for {name}"
            );
        }
    }
}
