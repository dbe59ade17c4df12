use leptos::prelude::*;
use leptos_meta::Title;

use super::site_config;
use crate::content::{
    CONTACT_ID, HERO_ID, PROJECTS, PROJECTS_ID, SERVICES, SERVICES_ID, TESTIMONIALS, TESTIMONIALS_ID,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <ServicesSection />
        <ProjectsSection />
        <TestimonialsSection />
    }
}

#[component]
fn SectionHeading(tag: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16 section-content">
            <div class="inline-block bg-gray-800 rounded-full px-6 py-2 mb-6 border border-purple-500/30">
                <span class="text-sm font-medium bg-gradient-to-r from-indigo-400 to-purple-500 bg-clip-text text-transparent">
                    {tag}
                </span>
            </div>
            <h2 class="text-4xl font-bold">{title}</h2>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let owner = site_config().owner_name;
    view! {
        <section id=HERO_ID class="min-h-screen flex items-center px-4 pt-24">
            <div class="max-w-6xl mx-auto section-content">
                <p class="text-purple-400 font-medium mb-4">"Hello, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">{owner}</h1>
                <p class="text-xl text-gray-300 max-w-2xl mb-10 leading-relaxed">
                    "I design and build fast, accessible websites and web apps that help people and businesses tell their story."
                </p>
                <div class="flex flex-wrap gap-4">
                    <a
                        href=format!("#{PROJECTS_ID}")
                        class="px-6 py-3 rounded-lg font-medium bg-purple-600 hover:bg-purple-700 transition-all duration-300"
                    >
                        "View My Work"
                    </a>
                    <a
                        href=format!("#{CONTACT_ID}")
                        class="px-6 py-3 rounded-lg font-medium border border-purple-500/50 hover:border-purple-400 transition-all duration-300"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id=SERVICES_ID class="w-full py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading tag="WHAT I DO" title="Services" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="p-6 rounded-xl bg-gray-800/50 border border-gray-700 hover:border-purple-500/50 transition-all duration-300 section-content">
                                    <i class=format!("{} text-3xl text-purple-500", service.icon)></i>
                                    <h3 class="text-xl font-bold mt-4 mb-2">{service.title}</h3>
                                    <p class="text-gray-300 leading-relaxed">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=PROJECTS_ID class="w-full py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading tag="MY WORK" title="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <a
                                    href=project.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="block p-6 rounded-xl bg-gray-800/50 border border-gray-700 hover:border-purple-500/50 hover:shadow-lg hover:shadow-purple-900/20 transition-all duration-300 section-content"
                                >
                                    <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                                    <p class="text-gray-300 mb-4">{project.summary}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="rounded-md px-2 py-1 bg-purple-900/30 text-purple-300 text-xs">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id=TESTIMONIALS_ID class="w-full py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading tag="KIND WORDS" title="Testimonials" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="p-6 rounded-xl bg-gray-800/30 border border-gray-700 section-content">
                                    <blockquote class="text-gray-300 italic mb-4">
                                        "“" {t.quote} "”"
                                    </blockquote>
                                    <figcaption>
                                        <div class="font-bold">{t.author}</div>
                                        <div class="text-sm text-purple-400">{t.role}</div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
