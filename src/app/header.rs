use leptos::prelude::*;

use crate::profile::PROFILE;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 bg-black/70 backdrop-blur border-b border-neutral-900">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#" class="text-xl font-bold text-white">
                    {PROFILE.name}
                </a>
                <nav class="flex items-center gap-6 text-sm">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="text-neutral-400 hover:text-white transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=PROFILE.resume_path
                        download=PROFILE.resume_file_name
                        class="text-neutral-400 hover:text-white transition-colors"
                    >
                        "Resume"
                    </a>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-neutral-400 hover:text-white transition-colors"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain text-lg"></i>
                    </a>
                </nav>
            </div>
        </header>
    }
}
