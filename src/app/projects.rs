use leptos::{either::Either, ev::MouseEvent, html::Img, prelude::*};

use crate::{
    catalog::{catalog, CategoryFilter, ProjectRecord, Thumbnail},
    gallery::GalleryViewState,
};

const CARD_TECH_LIMIT: usize = 3;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let state = RwSignal::new(GalleryViewState::new());
    let selected = Memo::new(move |_| state.with(|s| s.selected_record(catalog())));

    view! {
        <section id="projects" class="bg-black text-white min-h-screen p-4 md:p-6">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-8 bg-clip-text text-transparent bg-gradient-to-b from-neutral-50 to-neutral-400">
                    "Projects"
                </h2>
                <CategoryPills state />
                <div class="mt-8">
                    {move || match selected.get() {
                        Some(project) => Either::Left(view! { <ProjectDetail project state /> }),
                        None => Either::Right(view! { <ProjectGrid state /> }),
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryPills(state: RwSignal<GalleryViewState>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-3">
            {CategoryFilter::options()
                .map(|filter| {
                    let is_active = move || state.with(|s| s.active_category() == filter);
                    view! {
                        <button
                            on:click=move |_| state.update(|s| s.select_category(filter))
                            class=move || {
                                if is_active() {
                                    "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-gradient-to-r from-teal-500 to-teal-700 text-white shadow-[0_0_15px_rgba(20,184,166,0.35)]"
                                } else {
                                    "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-[#121212] text-gray-300 hover:text-white hover:bg-[#282828] border border-neutral-800"
                                }
                            }
                            aria-pressed=move || is_active().to_string()
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectGrid(state: RwSignal<GalleryViewState>) -> impl IntoView {
    let visible = Memo::new(move |_| {
        state.with(|s| {
            s.visible_projects(catalog())
                .iter()
                .map(|p| p.record())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=move || visible.get().into_iter().enumerate()
                key=|(i, p)| (*i, p.title.clone())
                children=move |(i, project)| view! { <ProjectCard project index=i state /> }
            />
        </div>
        <Show when=move || visible.with(Vec::is_empty)>
            <p class="text-center text-neutral-500 py-12">"No projects in this category yet."</p>
        </Show>
    }
}

#[component]
fn ProjectCard(
    project: &'static ProjectRecord,
    index: usize,
    state: RwSignal<GalleryViewState>,
) -> impl IntoView {
    let title = project.title.as_str();
    let is_hovered = move || state.with(|s| s.is_hovered(title));
    let description_mode = move || state.with(|s| s.description_mode(project));
    let extra_tech = project.technologies.len().saturating_sub(CARD_TECH_LIMIT);

    let open = move |_: MouseEvent| {
        state.update(|s| {
            if let Some(p) = s.visible_project(catalog(), title) {
                s.open_project(p);
            }
        })
    };

    view! {
        <div
            class=move || {
                if is_hovered() {
                    "project-card group relative rounded-xl p-5 bg-gradient-to-b from-[#1E1E1E] to-[#121212] border border-teal-600/60 cursor-pointer transition-all duration-300 -translate-y-1 shadow-[0_0_25px_rgba(20,184,166,0.25)] fade-in-up"
                } else {
                    "project-card group relative rounded-xl p-5 bg-gradient-to-b from-[#1E1E1E] to-[#121212] border border-[#282828] cursor-pointer transition-all duration-300 fade-in-up"
                }
            }
            style=format!("animation-delay: {:.1}s;", index as f32 * 0.1)
            on:mouseenter=move |_| state.update(|s| s.hover(Some(title)))
            on:mouseleave=move |_| state.update(|s| s.hover(None))
            on:click=open
        >
            <div class="h-40 w-full bg-[#333] rounded-lg overflow-hidden mb-4">
                <ProjectThumbnail project glyph_class="text-6xl" />
            </div>
            <span class="text-xs text-teal-500 font-medium">{project.category.label()}</span>
            <h3 class="text-lg font-semibold text-white mt-1">{title}</h3>
            <p class=move || {
                if description_mode().is_clamped() {
                    "text-sm text-gray-400 mt-2 line-clamp-2"
                } else {
                    "text-sm text-gray-400 mt-2"
                }
            }>{project.description.as_str()}</p>
            {move || {
                description_mode()
                    .toggle_label()
                    .map(|label| {
                        view! {
                            <button
                                class="text-xs text-teal-400 hover:text-teal-300 mt-1"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    state.update(|s| s.toggle_expand(title));
                                }
                            >
                                {label}
                            </button>
                        }
                    })
            }}
            <div class="flex gap-2 flex-wrap mt-4">
                {project
                    .technologies
                    .iter()
                    .take(CARD_TECH_LIMIT)
                    .map(|tech| {
                        view! {
                            <span class="text-xs text-gray-300 px-2 py-1 bg-[#333] rounded-full">
                                {tech.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
                {(extra_tech > 0)
                    .then(|| {
                        view! {
                            <span class="text-xs text-gray-500 px-2 py-1">
                                {format!("+{extra_tech}")}
                            </span>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(
    project: &'static ProjectRecord,
    state: RwSignal<GalleryViewState>,
) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-gradient-to-b from-[#1E1E1E] to-[#121212] fade-in">
            <button
                on:click=move |_| state.update(|s| s.close_detail())
                class="flex items-center text-gray-400 hover:text-white mb-6 transition-transform hover:-translate-x-1"
            >
                <span class="mr-2">"←"</span>
                "Back to projects"
            </button>

            <div class="flex flex-col md:flex-row gap-6">
                <div class="w-full md:w-64 h-64 bg-[#333] rounded-lg flex-shrink-0 overflow-hidden">
                    <ProjectThumbnail project glyph_class="text-6xl" />
                </div>

                <div class="flex-1">
                    <span class="text-sm text-[#0F766E] font-medium">
                        {project.category.label()}
                    </span>
                    <h1 class="text-4xl font-bold mt-1">{project.title.as_str()}</h1>
                    <p class="text-gray-300 mb-6 mt-3">{project.description.as_str()}</p>

                    <div class="mb-6">
                        <h3 class="text-lg font-medium mb-2">"Technologies"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="text-sm text-gray-200 px-3 py-1 bg-[#333] rounded-full">
                                            {tech.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="flex gap-4 flex-wrap">
                        <a
                            href=project.github_link.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 bg-[#333] hover:bg-[#444] text-white px-4 py-2 rounded-full transition-transform hover:scale-105"
                        >
                            <i class="devicon-github-plain"></i>
                            "GitHub"
                        </a>
                        {match project.live_demo() {
                            Some(url) => Either::Left(view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 bg-gradient-to-r from-teal-500 to-teal-700 text-white px-4 py-2 rounded-full transition-transform hover:scale-105"
                                >
                                    <span>"↗"</span>
                                    "Live Demo"
                                </a>
                            }),
                            None => Either::Right(view! {
                                <span
                                    class="flex items-center gap-2 bg-[#222] text-gray-500 px-4 py-2 rounded-full cursor-not-allowed"
                                    aria-disabled="true"
                                    title="No live demo available"
                                >
                                    "Live Demo"
                                </span>
                            }),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Project image, or the title's first letter when there is no image or it
/// fails to load.
#[component]
fn ProjectThumbnail(project: &'static ProjectRecord, glyph_class: &'static str) -> impl IntoView {
    let (load_failed, set_load_failed) = signal(false);
    let img_ref = NodeRef::<Img>::new();

    // the server-rendered image may have failed before hydration
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if Thumbnail::is_broken(img.complete(), img.natural_width()) {
                log::warn!("image failed before hydration: {}", img.src());
                set_load_failed.set(true);
            }
        }
    });

    move || match project.thumbnail(load_failed.get()) {
        Thumbnail::Image(src) => Either::Left(view! {
            <img
                node_ref=img_ref
                src=src
                alt=project.title.as_str()
                class="w-full h-full object-cover"
                loading="lazy"
                on:error=move |_| {
                    log::warn!("image failed to load: {src}");
                    set_load_failed.set(true);
                }
            />
        }),
        Thumbnail::Glyph(c) => Either::Right(view! {
            <div class=format!(
                "{glyph_class} font-bold text-gray-300 flex justify-center items-center h-full",
            )>{c.to_string()}</div>
        }),
    }
}
