use leptos::prelude::*;

use crate::content::{portfolio, Anchor};

use super::section::{icon, use_revealed, Section, SectionHeader};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <Section anchor=Anchor::Experience shaded=true>
            <SectionHeader eyebrow="03. My Journey" title="Professional" accent="Experience" />
            <Timeline />
        </Section>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    let revealed = use_revealed();

    view! {
        <div class="relative">
            <div
                class="hidden md:block absolute left-1/2 -translate-x-1/2 w-1 bg-gradient-to-b from-primary-500 via-purple-500 to-pink-500 rounded-full transition-all duration-1000 ease-out"
                style:height=move || if revealed.get() { "100%" } else { "0%" }
            ></div>
            <div class="space-y-12 stagger">
                {portfolio()
                    .experience
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        // alternate sides of the line on wide screens
                        let side = if i % 2 == 0 { "md:pr-12 md:mr-auto" } else { "md:pl-12 md:ml-auto" };
                        view! {
                            <div class=format!("relative md:w-1/2 {side}")>
                                <div class="card">
                                    <div class=format!(
                                        "inline-flex items-center justify-center w-12 h-12 rounded-lg bg-gradient-to-br {} mb-4",
                                        entry.color,
                                    )>
                                        <i class=format!("{} text-white text-xl", icon("briefcase")) />
                                    </div>
                                    <h3 class="text-xl md:text-2xl font-bold text-dark-50 mb-2">
                                        {entry.title.clone()}
                                    </h3>
                                    <p class="text-primary-400 font-semibold mb-3">{entry.company.clone()}</p>
                                    <div class="flex flex-wrap gap-4 text-dark-400 text-sm mb-4">
                                        <span class="flex items-center gap-1">
                                            <i class=icon("calendar") />
                                            {entry.period.clone()}
                                        </span>
                                        <span class="flex items-center gap-1">
                                            <i class=icon("map-pin") />
                                            {entry.location.clone()}
                                        </span>
                                    </div>
                                    <ul class="space-y-2">
                                        {entry
                                            .responsibilities
                                            .iter()
                                            .map(|r| {
                                                view! {
                                                    <li class="flex items-start gap-2 text-dark-300">
                                                        <span class="text-primary-400 mt-1">"▹"</span>
                                                        <span>{r.clone()}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
