use leptos::prelude::*;

use crate::content::{portfolio, Anchor, Project, ALL_PROJECTS};

use super::section::{icon, Section, SectionHeader};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &portfolio().projects;
    let (filter, set_filter) = signal(ALL_PROJECTS.to_string());

    view! {
        <Section anchor=Anchor::Projects>
            <SectionHeader eyebrow="04. My Work" title="Featured" accent="Projects" />
            <div class="flex flex-wrap justify-center gap-3 mb-12">
                {projects
                    .categories
                    .iter()
                    .map(|c| {
                        let id = c.id.clone();
                        let selected = {
                            let id = id.clone();
                            move || filter.with(|f| *f == id)
                        };
                        view! {
                            <button
                                class=move || {
                                    if selected() {
                                        "px-6 py-2 rounded-lg font-medium bg-gradient-to-r from-primary-500 to-purple-500 text-white shadow-lg"
                                    } else {
                                        "px-6 py-2 rounded-lg font-medium bg-white/5 text-dark-300 hover:bg-white/10"
                                    }
                                }
                                on:click=move |_| set_filter.set(id.clone())
                            >
                                {c.label.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid sm:grid-cols-1 md:grid-cols-2 gap-6 sm:gap-8">
                {move || {
                    let category = filter.get();
                    portfolio()
                        .projects_in(&category)
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
            <div class="text-center mt-12">
                <a
                    href=projects.github_profile.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn-outline inline-flex items-center gap-2"
                >
                    <i class=icon("github") />
                    "View More on GitHub"
                </a>
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="card group overflow-hidden fade-in hover:-translate-y-2 transition-transform">
            <div class="relative h-48 mb-6 rounded-lg overflow-hidden bg-gradient-to-br from-dark-800 to-dark-700">
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-br {} opacity-20",
                    project.color,
                )></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class=format!(
                        "w-24 h-24 rounded-2xl bg-gradient-to-br {} flex items-center justify-center",
                        project.color,
                    )>
                        <i class=format!("{} text-white text-4xl", icon(&project.icon)) />
                    </div>
                </div>
            </div>
            <h3 class="text-2xl font-bold mb-3 text-dark-50 group-hover:text-primary-400 transition-colors">
                {project.title.clone()}
            </h3>
            <p class="text-dark-300 mb-4 leading-relaxed">{project.description.clone()}</p>
            <ul class="mb-4 space-y-1">
                {project
                    .feature_preview()
                    .iter()
                    .map(|f| {
                        view! {
                            <li class="flex items-start gap-2 text-dark-400 text-sm">
                                <span class="text-primary-400">"▹"</span>
                                <span>{f.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-3 py-1 text-xs font-medium bg-primary-500/10 text-primary-400 rounded-full border border-primary-500/30">
                                {t.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4">
                {project
                    .source()
                    .map(|href| {
                        view! {
                            <a
                                href=href.to_string()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 text-dark-300 hover:text-primary-400 transition-colors"
                            >
                                <i class=icon("github") />
                                <span class="text-sm font-medium">"Code"</span>
                            </a>
                        }
                    })}
                {project
                    .live_demo()
                    .map(|href| {
                        view! {
                            <a
                                href=href.to_string()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 text-dark-300 hover:text-primary-400 transition-colors"
                            >
                                <i class=icon("external-link") />
                                <span class="text-sm font-medium">"Live Demo"</span>
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
