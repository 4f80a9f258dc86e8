use leptos::prelude::*;

use super::dom::navigator;
use super::scene::Scene;
use crate::profile::{HERO_STATS, OWNER, ROLE};
use crate::scene::{HERO_CAMERA, HERO_SCENE};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = navigator();
    let stat_colors = ["text-neon-cyan", "text-neon-purple", "text-neon-pink"];

    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0 starfield">
                <Scene meshes=HERO_SCENE.to_vec() camera=HERO_CAMERA />
            </div>

            <div class="absolute inset-0 bg-gradient-to-br from-background/50 via-transparent to-background/80 z-10"></div>

            <div class="relative z-20 container mx-auto px-4 text-center">
                <div class="max-w-4xl mx-auto animate-fade-in-up" style="animation-delay: 200ms">
                    <h1 class="text-6xl md:text-8xl font-bold mb-6 animate-zoom-in" style="animation-delay: 500ms">
                        <span class="block text-gradient">{OWNER}</span>
                        <span class="block text-2xl md:text-4xl font-normal text-foreground/80 mt-2">
                            {ROLE}
                        </span>
                    </h1>

                    <p class="text-xl md:text-2xl text-foreground/70 mb-8 max-w-2xl mx-auto animate-fade-in-up" style="animation-delay: 800ms">
                        "Crafting immersive digital experiences with "
                        <span class="text-neon-cyan">"3+ years"</span>
                        " of expertise in modern web technologies"
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center animate-fade-in-up" style="animation-delay: 1s">
                        <button
                            class="glass-effect px-8 py-4 rounded-xl text-lg font-semibold text-foreground hover:text-neon-cyan hover:scale-105 transition-all border border-neon-purple/30 hover:border-neon-cyan/50 group"
                            on:click=move |_| {
                                nav.go_to("projects");
                            }
                        >
                            <span class="flex items-center gap-2">
                                "View My Work"
                                <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                            </span>
                        </button>
                        <button
                            class="px-8 py-4 rounded-xl text-lg font-semibold bg-gradient-to-r from-neon-purple to-neon-pink text-white hover:from-neon-cyan hover:to-neon-purple hover:scale-105 transition-all shadow-lg hover:shadow-xl"
                            on:click=move |_| {
                                nav.go_to("contact");
                            }
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="mt-12 flex justify-center items-center gap-8 animate-fade-in" style="animation-delay: 1.2s">
                        {HERO_STATS
                            .iter()
                            .zip(stat_colors)
                            .enumerate()
                            .map(|(i, (stat, color))| {
                                view! {
                                    {(i > 0).then(|| view! { <div class="w-px h-12 bg-border"></div> })}
                                    <div class="text-center">
                                        <div class=format!("text-3xl font-bold {color}")>{stat.value}</div>
                                        <div class="text-sm text-foreground/60">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-20 animate-fade-in-up" style="animation-delay: 1.5s">
                <div class="w-6 h-10 border-2 border-neon-cyan rounded-full flex justify-center animate-bounce-slow">
                    <div class="w-1 h-3 bg-neon-cyan rounded-full mt-2"></div>
                </div>
            </div>
        </section>
    }
}
