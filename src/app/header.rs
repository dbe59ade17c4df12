use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::site_config;
use crate::content::{CONTACT_NAV, NAV_ITEMS, SOCIAL_LINKS};
use crate::nav::{NavigationMenu, ScrollObserver};

#[component]
pub fn Header() -> impl IntoView {
    let config = site_config();
    let menu = RwSignal::new(NavigationMenu::default());
    let scroll = RwSignal::new(ScrollObserver::new(config.scroll_threshold));

    let read_offset = move || {
        let offset = window().scroll_y().unwrap_or_default();
        scroll.maybe_update(|s| s.observe(offset));
    };

    // removed again by use_event_listener when the header's owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| read_offset());

    // the page may load already scrolled
    Effect::new(move |_| read_offset());

    let header_class = move || {
        let base = "w-full fixed top-0 left-0 z-50 transition-all duration-300";
        if scroll.with(|s| s.state().is_scrolled()) {
            format!("{base} bg-[#0f0f0f]/95 backdrop-blur-md py-2 shadow-xl")
        } else {
            format!("{base} bg-transparent py-3")
        }
    };

    view! {
        <header class=header_class>
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-end h-16">
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="relative text-white hover:text-purple-300 transition-colors font-medium text-sm uppercase tracking-wider group"
                                    >
                                        {item.label}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-purple-400 transition-all duration-300 group-hover:w-full"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=CONTACT_NAV.href()
                            class="ml-4 px-4 py-2 text-white text-sm font-medium rounded-lg shadow-lg bg-gradient-to-r from-purple-600 to-indigo-500 hover:scale-105 transition-transform duration-300"
                        >
                            {CONTACT_NAV.label}
                        </a>
                    </nav>
                    <button
                        type="button"
                        class="md:hidden text-white text-2xl z-50 cursor-pointer active:scale-90"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu.with(|m| m.is_open()).to_string()
                        on:click=move |_| menu.update(NavigationMenu::toggle)
                    >
                        {move || if menu.with(|m| m.is_open()) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || menu.with(|m| m.is_open()).then(|| view! { <MobileMenu menu /> })}
        </header>
    }
}

#[component]
fn MobileMenu(menu: RwSignal<NavigationMenu>) -> impl IntoView {
    let close = move |_: ev::MouseEvent| menu.update(NavigationMenu::close);

    view! {
        <div class="md:hidden menu-enter bg-[#0f0f0f]/95 backdrop-blur-lg absolute top-16 left-0 right-0 shadow-xl border-t border-purple-900/20">
            <div class="px-4 pt-4 pb-6 space-y-4">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href()
                                on:click=close
                                class="block py-3 text-xl px-4 text-white/90 hover:text-purple-300 rounded-lg hover:bg-purple-900/10 transition-all font-medium"
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="flex justify-center gap-6 pt-2">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label
                                    class="text-white/70 hover:text-purple-300 p-2"
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                    <MailIcon />
                </div>
                <a
                    href=CONTACT_NAV.href()
                    on:click=close
                    class="block mt-4 text-xl py-3 px-4 bg-gradient-to-r from-purple-600 to-indigo-500 text-white rounded-lg text-center font-medium shadow-lg"
                >
                    "Let's Connect"
                </a>
            </div>
        </div>
    }
}

#[component]
fn MailIcon() -> impl IntoView {
    let email = site_config().contact_email;
    view! {
        <a
            href=format!("mailto:{email}")
            aria-label="Email"
            class="text-white/70 hover:text-purple-300 p-2"
        >
            <i class="extra-email"></i>
        </a>
    }
}
