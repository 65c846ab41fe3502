use leptos::prelude::*;

use crate::skills::{skills, Skill, SkillFilter};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (active, set_active) = signal(SkillFilter::All);
    let (hovered, set_hovered) = signal(None::<String>);

    view! {
        <section id="skills" class="min-h-screen relative py-20 flex flex-col justify-center">
            <div class="absolute inset-0 z-0 hero-waves slow"></div>
            <div class="container max-w-5xl mx-auto px-4 relative z-10">
                <div class="text-center mb-12 fade-in-up">
                    <h2 class="text-4xl md:text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-b from-neutral-50 to-neutral-400">
                        "Skills & Expertise"
                    </h2>
                    <p class="text-neutral-400 mt-4 max-w-2xl mx-auto">
                        "My technical toolkit has been refined through building web applications and solving complex problems."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {SkillFilter::TABS
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    on:click=move |_| set_active.set(tab)
                                    class=move || {
                                        if active.get() == tab {
                                            "px-4 py-2 rounded-lg text-sm transition-all duration-300 backdrop-blur bg-gradient-to-r from-teal-500 to-teal-700 text-white"
                                        } else {
                                            "px-4 py-2 rounded-lg text-sm transition-all duration-300 backdrop-blur bg-black/40 text-neutral-400 hover:text-white border border-neutral-800"
                                        }
                                    }
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        skills()
                            .filter(active.get())
                            .into_iter()
                            .map(|skill| view! { <SkillCard skill=skill.clone() hovered set_hovered /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    skill: Skill,
    hovered: ReadSignal<Option<String>>,
    set_hovered: WriteSignal<Option<String>>,
) -> impl IntoView {
    let name = skill.name.clone();
    let is_hovered = {
        let name = name.clone();
        Memo::new(move |_| hovered.with(|h| h.as_deref() == Some(name.as_str())))
    };
    let color = skill.color().to_string();
    let border = {
        let color = color.clone();
        move || {
            if is_hovered.get() {
                format!("border-color: {color}; box-shadow: 0 0 15px {color}26;")
            } else {
                "border-color: #1a1a1a;".to_string()
            }
        }
    };
    let bar = format!(
        "width: {}%; background: linear-gradient(90deg, {color} 0%, {color} 100%);",
        skill.percent()
    );
    let glow = format!("background: {color};");

    view! {
        <div
            on:mouseenter=move |_| set_hovered.set(Some(name.clone()))
            on:mouseleave=move |_| set_hovered.set(None)
            class=move || {
                if is_hovered.get() {
                    "relative overflow-hidden rounded-xl p-6 flex flex-col border bg-black/40 backdrop-blur transform transition-all duration-300 -translate-y-[5px]"
                } else {
                    "relative overflow-hidden rounded-xl p-6 flex flex-col border bg-black/40 backdrop-blur transform transition-all duration-300"
                }
            }
            style=border
        >
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-xl font-bold text-white">{skill.name.clone()}</h3>
                <span class="text-neutral-400 text-sm">{format!("{}%", skill.percent())}</span>
            </div>
            <div class="w-full bg-black/50 rounded-full h-2 mb-2">
                <div class="h-full rounded-full skill-bar" style=bar></div>
            </div>
            <Show when=move || is_hovered.get()>
                <div class="absolute -inset-1 z-0 opacity-20 blur-xl pointer-events-none" style=glow.clone()></div>
            </Show>
        </div>
    }
}
