use leptos::prelude::*;

use crate::content::{portfolio, Anchor};

use super::section::{icon, Section, SectionHeader};

#[component]
pub fn About() -> impl IntoView {
    let about = &portfolio().about;

    view! {
        <Section anchor=Anchor::About shaded=true>
            <SectionHeader eyebrow="01. About Me" title="Who" accent="I Am" />
            <div class="grid lg:grid-cols-2 gap-12 items-center mb-16">
                <div class="space-y-6">
                    {about
                        .paragraphs
                        .iter()
                        .map(|p| {
                            view! { <p class="text-dark-200 text-lg leading-relaxed">{p.clone()}</p> }
                        })
                        .collect_view()}
                </div>
                <div class="glass-effect rounded-2xl p-8 space-y-6">
                    <h3 class="text-2xl font-bold gradient-text mb-6">"Quick Stats"</h3>
                    <div class="space-y-4 stagger">
                        {about
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="flex items-center justify-between p-4 bg-white/5 rounded-lg hover:bg-white/10 transition-colors">
                                        <span class="flex items-center gap-3 text-dark-200">
                                            <span class="text-2xl">{stat.icon.clone()}</span>
                                            {stat.label.clone()}
                                        </span>
                                        <span class="text-primary-400 font-bold text-xl">
                                            {stat.value.clone()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 stagger">
                {about
                    .highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <div class="card group hover:-translate-y-2 transition-transform">
                                <div class=format!(
                                    "w-16 h-16 rounded-xl bg-gradient-to-br {} flex items-center justify-center mb-4 group-hover:scale-110 transition-transform",
                                    h.color,
                                )>
                                    <i class=format!("{} text-white text-3xl", icon(&h.icon)) />
                                </div>
                                <h3 class="text-xl font-bold mb-2 text-dark-50">{h.title.clone()}</h3>
                                <p class="text-dark-300">{h.description.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
