use leptos::prelude::*;

use super::dom::navigator;
use super::scene::Scene;
use crate::profile::with_alpha;
use crate::projects::{Project, ProjectFilterStore};
use crate::scene::{PROJECTS_CAMERA, PROJECTS_SCENE};

const TECH_PREVIEW: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let nav = navigator();
    let store = RwSignal::new(ProjectFilterStore::embedded());
    let (hovered, set_hovered) = signal(None::<u32>);
    let categories = store.with_untracked(|s| s.categories());

    view! {
        <section id="projects" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 opacity-30">
                <Scene meshes=PROJECTS_SCENE.to_vec() camera=PROJECTS_CAMERA />
            </div>
            <div class="absolute inset-0 bg-gradient-to-br from-transparent via-background/50 to-background"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16 animate-fade-in-up">
                    <h2 class="text-5xl font-bold text-gradient mb-4">"My Projects"</h2>
                    <p class="text-xl text-foreground/70 max-w-2xl mx-auto">
                        "Showcase of creative solutions and innovative web experiences"
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-12 animate-fade-in-up" style="animation-delay: 200ms">
                    {categories
                        .into_iter()
                        .map(|category| {
                            let label = category.label().to_string();
                            let selected = {
                                let category = category.clone();
                                move || store.with(|s| *s.selected() == category)
                            };
                            view! {
                                <button
                                    class=move || {
                                        if selected() {
                                            "px-6 py-3 rounded-full border transition-all bg-neon-purple text-white border-neon-purple shadow-lg shadow-neon-purple/25"
                                        } else {
                                            "px-6 py-3 rounded-full border transition-all glass-effect border-border hover:border-neon-purple/50"
                                        }
                                    }
                                    on:click=move |_| store.update(|s| s.set_category(category.clone()))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || store.with(|s| s.visible_projects()).into_iter().enumerate()
                        key=|(_, p)| p.id
                        children=move |(i, project)| {
                            view! { <ProjectCard project index=i hovered set_hovered /> }
                        }
                    />
                </div>

                <div class="text-center mt-16 animate-fade-in-up" style="animation-delay: 400ms">
                    <p class="text-foreground/70 mb-6">
                        "Want to see more projects or discuss a collaboration?"
                    </p>
                    <button
                        class="glass-effect px-8 py-4 rounded-xl text-lg font-semibold border border-neon-purple/30 hover:border-neon-purple text-foreground hover:text-neon-purple hover:scale-105 transition-all"
                        on:click=move |_| {
                            nav.go_to("contact");
                        }
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    hovered: ReadSignal<Option<u32>>,
    set_hovered: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let id = project.id;
    let is_hovered = move || hovered.get() == Some(id);
    let (techs, more) = project.tech_preview(TECH_PREVIEW);

    view! {
        <div
            class="group relative animate-fade-in-up"
            style=format!("animation-delay: {}ms", index * 100)
            on:mouseenter=move |_| set_hovered.set(Some(id))
            on:mouseleave=move |_| set_hovered.set(None)
        >
            <div class="glass-effect rounded-2xl overflow-hidden border border-white/10 group-hover:border-neon-purple/50 transition-all duration-300 card-tilt">
                <div class="relative h-48 overflow-hidden">
                    <div
                        class="absolute inset-0 opacity-80"
                        style=format!(
                            "background-image: linear-gradient(135deg, {}, {})",
                            with_alpha(&project.color, 0x20),
                            with_alpha(&project.color, 0x40),
                        )
                    ></div>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class=move || {
                            if is_hovered() {
                                "text-4xl font-bold opacity-20 transition-transform duration-[2000ms] spin-y"
                            } else {
                                "text-4xl font-bold opacity-20 transition-transform duration-[2000ms]"
                            }
                        }>{project.badge()}</div>
                    </div>

                    <div class="absolute inset-0 bg-gradient-to-t from-background via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <div class="absolute bottom-4 inset-x-4 flex gap-3">
                            <a
                                href=project.live_url.clone()
                                class="flex-1 bg-neon-cyan text-background text-center py-2 rounded-lg font-semibold hover:scale-105 transition-transform"
                            >
                                "Live Demo"
                            </a>
                            <a
                                href=project.github_url.clone()
                                class="flex-1 border border-neon-cyan text-neon-cyan text-center py-2 rounded-lg font-semibold hover:bg-neon-cyan hover:text-background transition-colors"
                            >
                                "GitHub"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="p-6">
                    <div class="flex items-center justify-between mb-2">
                        <span
                            class="text-xs px-2 py-1 rounded-full font-semibold"
                            style=format!(
                                "background-color: {}; color: {}",
                                with_alpha(&project.color, 0x20),
                                project.color,
                            )
                        >
                            {project.category.clone()}
                        </span>
                        <div
                            class=move || {
                                if is_hovered() { "w-3 h-3 rounded-full animate-pulse" } else { "w-3 h-3 rounded-full" }
                            }
                            style=format!("background-color: {}", project.color)
                        ></div>
                    </div>

                    <h3 class="text-xl font-bold text-foreground mb-2 group-hover:text-neon-cyan transition-colors">
                        {project.title.clone()}
                    </h3>
                    <p class="text-foreground/70 text-sm mb-4 line-clamp-2">
                        {project.description.clone()}
                    </p>

                    <div class="flex flex-wrap gap-2">
                        {techs
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="text-xs px-2 py-1 bg-background/50 border border-border rounded text-foreground/60">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {(more > 0)
                            .then(|| {
                                view! {
                                    <span class="text-xs px-2 py-1 text-foreground/60">
                                        {format!("+{more} more")}
                                    </span>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
