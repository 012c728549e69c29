use leptos::prelude::*;

use crate::content::{portfolio, Anchor, SkillCategory};

use super::section::{icon, use_revealed, Section, SectionHeader};

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &portfolio().skills;

    view! {
        <Section anchor=Anchor::Skills>
            <SectionHeader eyebrow="02. My Expertise" title="Skills &" accent="Technologies" />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 stagger">
                {skills
                    .categories
                    .iter()
                    .map(|category| view! { <CategoryCard category /> })
                    .collect_view()}
            </div>
            <div class="mt-16 glass-effect rounded-2xl p-8">
                <h3 class="text-2xl font-bold text-center mb-8 gradient-text">"Technology Stack"</h3>
                <div class="flex flex-wrap justify-center gap-4 stagger">
                    {skills
                        .stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-4 py-2 bg-white/5 border border-primary-500/30 rounded-lg text-dark-200 font-medium hover:bg-primary-500/20 hover:border-primary-500 transition-all cursor-default">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let revealed = use_revealed();
    let color = category.color.clone();

    view! {
        <div class="card group hover:-translate-y-2 transition-transform">
            <div class="flex items-center gap-4 mb-6">
                <div class=format!(
                    "w-14 h-14 rounded-lg bg-gradient-to-br {color} flex items-center justify-center group-hover:scale-110 transition-transform",
                )>
                    <i class=format!("{} text-white text-2xl", icon(&category.icon)) />
                </div>
                <h3 class="text-xl font-bold text-dark-50">{category.title.clone()}</h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        let width = skill.bar_width();
                        let label = width.clone();
                        view! {
                            <div class="space-y-2">
                                <div class="flex justify-between items-center">
                                    <span class="text-dark-200 font-medium">{skill.name.clone()}</span>
                                    <span class="text-primary-400 font-semibold text-sm">
                                        {label}
                                    </span>
                                </div>
                                <div class="w-full h-2 bg-dark-700 rounded-full overflow-hidden">
                                    // bars grow from zero once the section is revealed
                                    <div
                                        class=format!(
                                            "h-full bg-gradient-to-r {color} rounded-full transition-all duration-1000 ease-out",
                                        )
                                        style:width=move || {
                                            if revealed.get() { width.clone() } else { "0%".to_string() }
                                        }
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
