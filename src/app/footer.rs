use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{copyright, portfolio, Anchor};

use super::section::icon;

#[component]
pub fn Footer() -> impl IntoView {
    let site = portfolio();
    let year = Utc::now().year();

    view! {
        <footer class="bg-dark-900 border-t border-white/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <h3 class="text-2xl font-bold gradient-text mb-4">
                            {site.profile.brand.clone()}
                        </h3>
                        <p class="text-dark-400 mb-4">{site.footer.blurb.clone()}</p>
                        <div class="flex gap-4">
                            {site
                                .profile
                                .socials
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-10 h-10 rounded-lg bg-white/5 border border-white/10 flex items-center justify-center text-dark-400 hover:text-primary-400 hover:border-primary-500 transition-all"
                                            aria-label=s.label.clone()
                                        >
                                            <i class=icon(&s.icon) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-dark-50 mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {Anchor::ALL
                                .iter()
                                .map(|a| {
                                    view! {
                                        <li class="hover:translate-x-1 transition-transform">
                                            <a
                                                href=a.href()
                                                class="text-dark-400 hover:text-primary-400 transition-colors"
                                            >
                                                {a.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-dark-50 mb-4">"Get In Touch"</h4>
                        <div class="space-y-2 text-dark-400">
                            <p>{site.profile.email.clone()}</p>
                            {site
                                .footer
                                .address
                                .iter()
                                .map(|line| view! { <p>{line.clone()}</p> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="pt-8 border-t border-white/10 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-dark-400 text-sm">{copyright(&site.profile.name, year)}</p>
                    <p class="text-dark-400 text-sm flex items-center gap-1">
                        "Built with " <span class="text-red-500 animate-pulse">"♥"</span>
                        " using Rust & Leptos"
                    </p>
                </div>
            </div>
        </footer>
    }
}
