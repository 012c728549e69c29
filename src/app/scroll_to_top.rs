use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::scroll::ScrollVisibility;

use super::section::icon;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visibility, set_visibility) = signal(ScrollVisibility::default());

    // removed again when this component is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        let mut v = visibility.get_untracked();
        if v.observe(offset) {
            set_visibility.set(v);
        }
    });

    let scroll_to_top = move |_: ev::MouseEvent| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || visibility.get().visible()>
            <button
                on:click=scroll_to_top
                class="fixed bottom-8 right-8 z-50 w-12 h-12 rounded-full bg-gradient-to-r from-primary-500 to-purple-500 text-white shadow-lg shadow-primary-500/50 flex items-center justify-center cursor-pointer pop-in hover:-translate-y-1 transition-transform"
                aria-label="Scroll to top"
            >
                <i class=icon("arrow-up") />
            </button>
        </Show>
    }
}
