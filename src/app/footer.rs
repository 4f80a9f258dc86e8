use leptos::prelude::*;

use crate::profile::{mailto, BUILD_YEAR, GITHUB_URL, LINKEDIN_URL, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-border relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-neon-cyan/5 via-neon-purple/5 to-neon-pink/5"></div>
            <div class="container mx-auto px-4 relative z-10">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <div class="text-2xl font-bold text-gradient">"Ashery"</div>
                    <div class="flex gap-6 text-foreground/70">
                        <a href=mailto() class="hover:text-neon-cyan transition-colors">
                            "Email"
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-neon-purple transition-colors"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-neon-pink transition-colors"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>
                <div class="mt-8 text-center text-sm text-foreground/50">
                    <p>{format!("© {BUILD_YEAR} Ashery. Built with Rust + Leptos")}</p>
                    <p class="mt-1">{TAGLINE}</p>
                </div>
            </div>
        </footer>
    }
}
