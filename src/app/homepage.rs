use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::navigation::{MobileMenu, Navigation, ScrollToTop};
use super::projects::Projects;
use crate::sections::{ScrollConfig, ScrollTracker};

/// The whole single-page portfolio. Owns the scroll tracker the navigation
/// bar reads from.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let tracker = RwSignal::new(ScrollTracker::new(ScrollConfig::default()));
    let scroll = Memo::new(move |_| tracker.with(|t| t.state()));
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use super::dom::DomViewport;

        // sync once the sections are laid out, in case the page loads scrolled
        Effect::new(move |_| {
            tracker.update(|t| {
                t.on_scroll(&DomViewport);
            });
        });

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            tracker.update(|t| {
                t.on_scroll(&DomViewport);
            });
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
            <Navigation scroll set_menu_open />
            <MobileMenu menu_open set_menu_open />
            <main>
                <Hero />
                <About />
                <Projects />
                <Contact />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}
