use leptos::prelude::*;

use super::dom::navigator;
use crate::profile::{mailto, LINKEDIN_URL, OWNER};
use crate::sections::{ScrollState, SECTIONS};

#[component]
pub fn Navigation(scroll: Memo<ScrollState>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let nav = navigator();

    view! {
        <nav class=move || {
            if scroll.get().is_past_threshold {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 backdrop-blur-md bg-background/80 border-b border-border animate-slide-down"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent animate-slide-down"
            }
        }>
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-2xl font-bold text-gradient hover:scale-105 transition-transform">
                        {OWNER}
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|section| {
                                let id = section.id;
                                let is_active = move || scroll.get().active_section == id;
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "relative px-4 py-2 text-sm font-medium transition-colors text-neon-cyan"
                                            } else {
                                                "relative px-4 py-2 text-sm font-medium transition-colors text-foreground hover:text-neon-purple"
                                            }
                                        }
                                        on:click=move |_| {
                                            nav.go_to(id);
                                        }
                                    >
                                        {section.label}
                                        <Show when=is_active>
                                            <div class="absolute bottom-0 inset-x-0 h-0.5 bg-gradient-to-r from-neon-cyan to-neon-purple"></div>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-3">
                        <div class="glass-effect p-2 rounded-lg border border-neon-purple/30">
                            <div class="w-2 h-2 bg-neon-green rounded-full animate-pulse"></div>
                        </div>
                        <button
                            class="md:hidden w-10 h-10 rounded-lg border border-border flex items-center justify-center text-foreground hover:text-neon-cyan transition-colors"
                            aria-label="Open menu"
                            on:click=move |_| set_menu_open.set(true)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn MobileMenu(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let nav = navigator();
    let close = move || set_menu_open.set(false);

    view! {
        <Show when=move || menu_open.get()>
            <div
                class="fixed inset-0 bg-background/80 backdrop-blur-md z-40 animate-fade-in"
                on:click=move |_| close()
            ></div>
            <div class="fixed top-0 right-0 h-full w-80 max-w-[85vw] bg-card border-l border-border z-50 overflow-hidden animate-slide-in-right">
                <div class="absolute inset-0 bg-gradient-to-br from-neon-cyan/5 via-neon-purple/5 to-neon-pink/5"></div>
                <div class="relative z-10 p-6 h-full flex flex-col">
                    <div class="flex items-center justify-between mb-8">
                        <div class="text-2xl font-bold text-gradient">{OWNER}</div>
                        <button
                            class="w-10 h-10 rounded-full bg-background/50 border border-border flex items-center justify-center text-foreground hover:text-neon-cyan transition-colors"
                            aria-label="Close menu"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                    </div>

                    <nav class="flex-1">
                        <div class="space-y-4">
                            {SECTIONS
                                .iter()
                                .enumerate()
                                .map(|(i, section)| {
                                    let id = section.id;
                                    view! {
                                        <button
                                            class="block w-full text-left py-4 px-6 rounded-lg border border-border hover:border-neon-purple/50 transition-all group animate-fade-in-left"
                                            style=format!("animation-delay: {}ms", 200 + i * 100)
                                            on:click=move |_| {
                                                nav.go_to_then(id, close);
                                            }
                                        >
                                            <span class="text-lg font-medium text-foreground group-hover:text-neon-purple transition-colors">
                                                {section.label}
                                            </span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </nav>

                    <div class="mt-8 space-y-4 animate-fade-in-up" style="animation-delay: 600ms">
                        <div class="text-sm text-foreground/60 mb-4">"Get in touch"</div>
                        <div class="flex gap-4">
                            <a
                                href=mailto()
                                class="flex-1 text-center py-3 bg-neon-cyan/20 border border-neon-cyan/30 rounded-lg text-neon-cyan hover:bg-neon-cyan/30 transition-colors"
                            >
                                "Email"
                            </a>
                            <a
                                href=LINKEDIN_URL
                                class="flex-1 text-center py-3 bg-neon-purple/20 border border-neon-purple/30 rounded-lg text-neon-purple hover:bg-neon-purple/30 transition-colors"
                            >
                                "LinkedIn"
                            </a>
                        </div>
                        <div class="text-xs text-foreground/40 text-center mt-4">
                            "Frontend Developer • 3+ Years Experience"
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let nav = navigator();
    view! {
        <button
            class="fixed bottom-8 right-8 w-12 h-12 bg-gradient-to-r from-neon-purple to-neon-pink rounded-full flex items-center justify-center text-white shadow-lg hover:shadow-xl hover:scale-110 transition-transform z-50 animate-fade-in-up"
            style="animation-delay: 2s"
            aria-label="Back to top"
            on:click=move |_| nav.go_to_top()
        >
            "↑"
        </button>
    }
}
