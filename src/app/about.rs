use leptos::prelude::*;

use super::scene::Scene;
use crate::profile::{CORE_TECH, SKILLS};
use crate::scene::{skill_orbit, SKILLS_CAMERA, SKILL_ORBIT_RADIUS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 mesh-gradient opacity-10"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16 animate-fade-in-up">
                    <h2 class="text-5xl font-bold text-gradient mb-4">"About Me"</h2>
                    <p class="text-xl text-foreground/70 max-w-2xl mx-auto">
                        "Frontend Developer & BSc Software Engineering Student"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <ProfileCard />
                        <div class="grid grid-cols-2 gap-4">
                            <div class="glass-effect p-6 rounded-xl text-center border border-neon-cyan/30 hover:scale-105 transition-transform">
                                <div class="text-3xl font-bold text-neon-cyan mb-2">"3+"</div>
                                <div class="text-sm text-foreground/60">"Years Experience"</div>
                            </div>
                            <div class="glass-effect p-6 rounded-xl text-center border border-neon-green/30 hover:scale-105 transition-transform">
                                <div class="text-3xl font-bold text-neon-green mb-2">"BSc"</div>
                                <div class="text-sm text-foreground/60">"Software Engineering"</div>
                            </div>
                        </div>
                    </div>

                    <div class="h-96 lg:h-[500px] relative">
                        <div class="absolute inset-0 flex items-center justify-center">
                            <div class="text-center mb-8 z-10 relative">
                                <h3 class="text-4xl font-bold text-gradient mb-2">"SKILLS"</h3>
                                <p class="text-foreground/60">"Interactive 3D Visualization"</p>
                            </div>
                        </div>
                        <Scene meshes=skill_orbit(&SKILLS, SKILL_ORBIT_RADIUS) camera=SKILLS_CAMERA />
                    </div>
                </div>

                <SkillBars />
            </div>
        </section>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    view! {
        <div class="glass-effect p-8 rounded-2xl border border-neon-purple/30 relative overflow-hidden group">
            <div class="absolute inset-0 bg-gradient-to-br from-neon-cyan/10 via-neon-purple/10 to-neon-pink/10 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>

            <div class="relative z-10">
                <div class="flex items-center gap-4 mb-6">
                    <div class="w-20 h-20 rounded-full bg-gradient-to-br from-neon-cyan to-neon-purple flex items-center justify-center text-2xl font-bold">
                        "A"
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-foreground">"Ashery"</h3>
                        <p class="text-neon-cyan">"Frontend Developer"</p>
                    </div>
                </div>

                <div class="space-y-4 text-foreground/80">
                    <p>
                        "Passionate frontend developer with 3+ years of experience creating immersive digital experiences. Currently working at "
                        <span class="text-neon-purple font-semibold">"SATA Technologies"</span>
                        " while pursuing BSc Software Engineering."
                    </p>
                    <p>
                        "Specialized in modern web technologies including React, TypeScript, and 3D web experiences. I love bringing designs to life with smooth animations and interactive elements."
                    </p>
                </div>

                <div class="mt-6 flex flex-wrap gap-3">
                    {CORE_TECH
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-neon-purple/20 border border-neon-purple/30 rounded-full text-sm hover:scale-110 transition-transform">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillBars() -> impl IntoView {
    view! {
        <div class="mt-16">
            <h3 class="text-3xl font-bold text-center mb-8 text-gradient">"Technical Skills"</h3>
            <div class="grid md:grid-cols-2 gap-6">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let entry = if i % 2 == 0 { "animate-fade-in-left" } else { "animate-fade-in-right" };
                        view! {
                            <div
                                class=format!("glass-effect p-4 rounded-xl border border-white/10 hover:scale-[1.02] transition-transform {entry}")
                                style=format!("animation-delay: {}ms", i * 100)
                            >
                                <div class="flex items-center justify-between mb-2">
                                    <span class="font-semibold text-foreground">{skill.name}</span>
                                    <span class="text-sm text-foreground/60">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="w-full bg-background/50 rounded-full h-2 overflow-hidden">
                                    <div
                                        class="h-full rounded-full animate-grow-x origin-left"
                                        style=format!(
                                            "width: {}%; background-color: {}; animation-delay: {}ms",
                                            skill.level,
                                            skill.color,
                                            500 + i * 100,
                                        )
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
