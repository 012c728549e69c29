use leptos::prelude::*;
use leptos_use::{use_interval, UseIntervalReturn};

use crate::content::{portfolio, Anchor};

use super::section::icon;

const ROLE_INTERVAL_MS: u64 = 3000;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;
    let UseIntervalReturn { counter, .. } = use_interval(ROLE_INTERVAL_MS);

    view! {
        <section
            id=Anchor::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 z-0">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary-500/20 rounded-full filter blur-3xl animate-float"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500/20 rounded-full filter blur-3xl animate-float [animation-delay:2s]"></div>
            </div>
            <div class="section-padding w-full z-10">
                <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-8 md:gap-12 items-center fade-in">
                    <div class="space-y-6 md:space-y-8">
                        <div>
                            <p class="text-primary-400 font-mono text-sm sm:text-base md:text-lg mb-2 md:mb-4">
                                {profile.greeting.clone()}
                            </p>
                            <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold text-dark-50 mb-2 md:mb-4">
                                {profile.name.clone()}
                            </h1>
                            <div class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold mb-4 md:mb-6 h-14 sm:h-16 md:h-20 flex items-center">
                                <h2 class="flex items-center">
                                    // keyed by tick: each rotation mounts a fresh span and replays the swap
                                    <For each=move || [counter.get()] key=|tick| *tick let:tick>
                                        <span class="gradient-text role-swap inline-block">
                                            {profile.role_at(tick as usize).unwrap_or_default()}
                                        </span>
                                    </For>
                                    <span class="inline-block w-1 h-8 md:h-10 bg-primary-400 ml-1 animate-blink"></span>
                                </h2>
                            </div>
                        </div>
                        <p class="text-dark-300 text-base sm:text-lg md:text-xl leading-relaxed max-w-xl">
                            {profile.intro.clone()}
                        </p>
                        <div class="flex flex-wrap gap-3 md:gap-4">
                            <a href=Anchor::Contact.href() class="btn-primary">
                                "Get In Touch"
                            </a>
                            <a
                                href=profile.resume.clone()
                                download=""
                                class="btn-outline flex items-center gap-2"
                            >
                                <i class=icon("download") />
                                " Download Resume"
                            </a>
                        </div>
                        <div class="flex gap-4 sm:gap-6 pt-2 md:pt-4">
                            {profile
                                .socials
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-dark-300 hover:text-primary-400 transition-colors duration-300 text-2xl"
                                            aria-label=s.label.clone()
                                        >
                                            <i class=icon(&s.icon) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative order-first md:order-last">
                        <div class="relative w-full max-w-sm sm:max-w-md mx-auto">
                            <div class="absolute inset-0 bg-gradient-to-r from-primary-500 via-purple-500 to-pink-500 rounded-2xl blur-2xl opacity-50 animate-pulse"></div>
                            <div class="relative glass-effect rounded-2xl overflow-hidden border-2 border-primary-500/30 hover:scale-105 transition-transform">
                                <img
                                    src=profile.image.clone()
                                    alt=profile.name.clone()
                                    class="w-full h-auto object-cover"
                                />
                            </div>
                            {profile
                                .badges
                                .iter()
                                .enumerate()
                                .map(|(i, badge)| {
                                    let class = if i % 2 == 0 {
                                        "absolute -top-4 -right-4 glass-effect rounded-lg px-4 py-2 animate-float text-primary-400 font-mono text-sm"
                                    } else {
                                        "absolute -bottom-4 -left-4 glass-effect rounded-lg px-4 py-2 animate-float text-purple-400 font-mono text-sm [animation-delay:1s]"
                                    };
                                    view! { <div class=class>{badge.clone()}</div> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
            <a
                href=Anchor::About.href()
                class="hidden sm:block absolute bottom-10 left-1/2 -translate-x-1/2 text-dark-300 hover:text-primary-400 animate-bounce text-3xl"
                aria-label="Scroll to about"
            >
                <i class=icon("arrow-down") />
            </a>
        </section>
    }
}
