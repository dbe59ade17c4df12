use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::site_config;
use crate::content::{HERO_ID, PROJECTS_ID, SERVICES_ID};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let owner = site_config().owner_name;
    let year = Utc::now().year();
    let build_date = BUILD_TIME.get(..10).unwrap_or(BUILD_TIME);
    let links = [
        (HERO_ID, "About Me"),
        (SERVICES_ID, "Services"),
        (PROJECTS_ID, "Projects"),
    ];

    view! {
        <footer class="text-white py-6 border-t border-gray-700">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between">
                <p class="text-sm text-gray-300">
                    {format!("© {year} ")} <span class="font-semibold text-white">{owner}</span>
                    ". All rights reserved."
                </p>
                <div class="mt-4 md:mt-0 flex gap-4">
                    {links
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="text-gray-400 hover:text-white transition duration-200"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="mt-4 md:mt-0 text-xs text-gray-500" title=BUILD_TIME>
                    "build " {build_date}
                </p>
            </div>
        </footer>
    }
}
