use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::scene::Scene;
use crate::contact::{ContactFormController, ContactTiming, Field, Phase, Ticket};
use crate::profile::{with_alpha, CONTACT_LINKS};
use crate::scene::{CONTACT_CAMERA, CONTACT_SCENE};

/// Schedule `ticket` and keep following the chain of transitions it starts.
/// The pending handle is kept so teardown can cancel it.
fn schedule(
    controller: RwSignal<ContactFormController>,
    pending: StoredValue<Option<TimeoutHandle>>,
    timing: ContactTiming,
    ticket: Ticket,
) {
    let res = set_timeout_with_handle(
        move || {
            pending.try_update_value(|p| *p = None);
            // None once the section has been torn down
            let next = controller.try_update(|c| c.fire(ticket)).flatten();
            if let Some(next) = next {
                schedule(controller, pending, timing, next);
            }
        },
        ticket.delay(&timing),
    );
    match res {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(e) => log::error!("couldn't schedule contact form transition: {e:?}"),
    }
}

#[component]
pub fn Contact(#[prop(optional)] timing: Option<ContactTiming>) -> impl IntoView {
    let timing = timing.unwrap_or_default();

    view! {
        <section id="contact" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 opacity-20">
                <Scene meshes=CONTACT_SCENE.to_vec() camera=CONTACT_CAMERA />
            </div>
            <div class="absolute inset-0 bg-gradient-to-t from-background via-transparent to-background/50"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16 animate-fade-in-up">
                    <h2 class="text-5xl font-bold text-gradient mb-4">"Get In Touch"</h2>
                    <p class="text-xl text-foreground/70 max-w-2xl mx-auto">
                        "Ready to create something amazing together? Let's discuss your next project"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div class="animate-fade-in-left" style="animation-delay: 200ms">
                        <ContactForm timing />
                    </div>
                    <div class="space-y-8 animate-fade-in-right" style="animation-delay: 400ms">
                        <ContactLinks />
                        <div class="glass-effect p-6 rounded-2xl border border-neon-green/30 text-center">
                            <div class="text-3xl mb-3">"⚡"</div>
                            <h4 class="font-bold text-lg mb-2">"Quick Response"</h4>
                            <p class="text-sm text-foreground/70">
                                "I typically respond within 24 hours during weekdays"
                            </p>
                        </div>
                        <div class="glass-effect p-6 rounded-2xl border border-neon-pink/30 text-center">
                            <div class="text-3xl mb-3">"🎯"</div>
                            <h4 class="font-bold text-lg mb-2">"Open to Opportunities"</h4>
                            <p class="text-sm text-foreground/70">
                                "Currently available for freelance projects and full-time positions"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm(timing: ContactTiming) -> impl IntoView {
    let controller = RwSignal::new(ContactFormController::new());
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let phase = Memo::new(move |_| controller.with(|c| c.phase()));

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_update_value(|p| p.take()) {
            handle.clear();
        }
        controller.try_update_untracked(|c| c.dispose());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match controller.try_update(|c| c.submit()) {
            Some(Ok(ticket)) => schedule(controller, pending, timing, ticket),
            Some(Err(e)) => log::warn!("contact form not sent: {e}"),
            None => {}
        }
    };

    let input = move |field: Field, kind: &'static str, focus: &'static str| {
        view! {
            <div>
                <label class="block text-sm font-medium text-foreground/80 mb-2">
                    {format!("{} *", field.label())}
                </label>
                <input
                    type=kind
                    name=field.name()
                    required=true
                    placeholder=field.placeholder()
                    class=format!(
                        "w-full px-4 py-3 bg-background/50 border border-border rounded-lg focus:outline-none focus:ring-2 transition-all {focus}",
                    )
                    prop:value=move || controller.with(|c| c.form().get(field).to_string())
                    on:input=move |ev| controller.update(|c| c.set_field(field, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="glass-effect p-8 rounded-2xl border border-neon-purple/30 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-neon-cyan/5 via-neon-purple/5 to-neon-pink/5 opacity-50"></div>
            <div class="relative z-10">
                <h3 class="text-2xl font-bold mb-6 text-foreground">"Send me a message"</h3>
                {move || {
                    if phase.get() == Phase::Submitted {
                        Either::Left(
                            view! {
                                <div class="text-center py-12 animate-zoom-in">
                                    <div class="text-6xl mb-4">"🚀"</div>
                                    <h4 class="text-xl font-bold text-neon-green mb-2">"Message Sent!"</h4>
                                    <p class="text-foreground/70">
                                        "Thank you for reaching out. I'll get back to you soon!"
                                    </p>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <form on:submit=on_submit class="space-y-6">
                                    <div class="grid md:grid-cols-2 gap-4">
                                        {input(Field::Name, "text", "focus:border-neon-cyan focus:ring-neon-cyan/20")}
                                        {input(Field::Email, "email", "focus:border-neon-purple focus:ring-neon-purple/20")}
                                    </div>
                                    {input(Field::Subject, "text", "focus:border-neon-pink focus:ring-neon-pink/20")}
                                    <div>
                                        <label class="block text-sm font-medium text-foreground/80 mb-2">
                                            {format!("{} *", Field::Message.label())}
                                        </label>
                                        <textarea
                                            name=Field::Message.name()
                                            required=true
                                            rows=5
                                            placeholder=Field::Message.placeholder()
                                            class="w-full px-4 py-3 bg-background/50 border border-border rounded-lg focus:border-neon-green focus:outline-none focus:ring-2 focus:ring-neon-green/20 transition-all resize-none"
                                            prop:value=move || controller.with(|c| c.form().message.clone())
                                            on:input=move |ev| {
                                                controller.update(|c| c.set_field(Field::Message, event_target_value(&ev)))
                                            }
                                        ></textarea>
                                    </div>
                                    <button
                                        type="submit"
                                        disabled=move || phase.get() != Phase::Idle
                                        class="w-full bg-gradient-to-r from-neon-purple to-neon-pink text-white py-4 rounded-lg font-semibold transition-all hover:from-neon-cyan hover:to-neon-purple disabled:opacity-50 disabled:cursor-not-allowed"
                                    >
                                        {move || {
                                            if phase.get() == Phase::Submitting {
                                                Either::Left(
                                                    view! {
                                                        <span class="flex items-center justify-center gap-2">
                                                            <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                                            "Sending..."
                                                        </span>
                                                    },
                                                )
                                            } else {
                                                Either::Right("Send Message")
                                            }
                                        }}
                                    </button>
                                </form>
                            },
                        )
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ContactLinks() -> impl IntoView {
    view! {
        <div class="glass-effect p-8 rounded-2xl border border-neon-cyan/30">
            <h3 class="text-2xl font-bold mb-6 text-foreground">"Let's connect"</h3>
            <p class="text-foreground/70 mb-8">
                "I'm always interested in new opportunities, collaborations, and interesting projects. Whether you're a company looking for a developer or another developer wanting to collaborate, I'd love to hear from you."
            </p>
            <div class="space-y-4">
                {CONTACT_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        view! {
                            <a
                                href=link.href
                                class="flex items-center gap-4 p-4 rounded-lg border border-white/10 hover:border-neon-cyan/50 hover:translate-x-2 transition-all group animate-fade-in-right"
                                style=format!("animation-delay: {}ms", i * 100)
                            >
                                <div
                                    class="text-2xl p-3 rounded-lg"
                                    style=format!("background-color: {}", with_alpha(link.color, 0x20))
                                >
                                    {link.icon}
                                </div>
                                <div>
                                    <div class="font-semibold text-foreground group-hover:text-neon-cyan transition-colors">
                                        {link.label}
                                    </div>
                                    <div class="text-sm text-foreground/60">{link.value}</div>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
