use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{profile::PROFILE, typewriter::Typewriter};

const TICK_MS: u64 = 80;
// ~2s on a finished phrase
const HOLD_TICKS: u32 = 25;

#[component]
pub fn HeroSection() -> impl IntoView {
    let typewriter = StoredValue::new(Typewriter::new(
        PROFILE.roles.iter().copied(),
        HOLD_TICKS,
    ));
    // server render shows the first role in full; the browser takes over on hydrate
    let (role, set_role) = signal(typewriter.with_value(|t| t.initial_text().to_string()));

    // no-op during server rendering
    let _ = use_interval_fn(
        move || typewriter.update_value(|t| set_role.set(t.tick().to_string())),
        TICK_MS,
    );

    view! {
        <section class="relative min-h-screen flex flex-col justify-center items-center text-center overflow-hidden">
            <div class="absolute inset-0 z-0 hero-waves"></div>
            <div class="absolute inset-0 z-[1] hero-overlay"></div>
            <div class="relative z-10 space-y-6">
                <h1 class="text-4xl md:text-7xl font-bold text-center bg-clip-text text-transparent bg-gradient-to-b from-neutral-50 to-neutral-400">
                    {PROFILE.name}
                </h1>
                <div class="text-2xl md:text-3xl text-gray-300 min-h-[2.5rem]">
                    <span>{move || role.get()}</span>
                    <span class="typewriter-cursor">"|"</span>
                </div>
                <a
                    href=PROFILE.resume_path
                    download=PROFILE.resume_file_name
                    class="inline-block bg-gradient-to-r from-teal-500 to-teal-700 text-white rounded-lg py-3 px-6 font-medium hover:opacity-90 transition-all duration-300"
                >
                    "Download Resume"
                </a>
            </div>
        </section>
    }
}
