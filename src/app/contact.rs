use leptos::{either::Either, ev, prelude::*, task::spawn_local};

use super::site_config;
use crate::contact::{
    submit, ContactStore, Field, FormFields, SimulatedSender, SubmissionController,
    SubmissionState, EMAIL_INPUT_PATTERN,
};
use crate::content::{CONTACT_ID, CONTACT_METHODS, SOCIAL_LINKS};

const INPUT_CLASS: &str = "w-full bg-gray-700/50 border border-gray-600 rounded-lg py-3 px-4 text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent transition-all duration-300";

/// Controller and fields live in separate signals so typing doesn't rerender the status.
#[derive(Clone, Copy)]
struct SignalStore {
    controller: RwSignal<SubmissionController>,
    fields: RwSignal<FormFields>,
}

impl ContactStore for SignalStore {
    /// Works on copies and only writes back (and notifies) the signals that changed.
    fn with_form<R>(&self, f: impl FnOnce(&mut SubmissionController, &mut FormFields) -> R) -> R {
        let mut controller = self.controller.get_untracked();
        let mut fields = self.fields.get_untracked();
        let res = f(&mut controller, &mut fields);
        self.controller
            .maybe_update(|slot| replace_if_changed(slot, controller));
        self.fields.maybe_update(|slot| replace_if_changed(slot, fields));
        res
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, next: T) -> bool {
    if *slot == next {
        return false;
    }
    *slot = next;
    true
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=CONTACT_ID class="w-full py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 section-content">
                    <div class="inline-block bg-gray-800 rounded-full px-6 py-2 mb-6 border border-purple-500/30">
                        <span class="text-sm font-medium bg-gradient-to-r from-indigo-400 to-purple-500 bg-clip-text text-transparent">
                            "GET IN TOUCH"
                        </span>
                    </div>
                    <h2 class="text-4xl font-bold mb-6">"Let's Connect"</h2>
                    <p class="text-lg text-gray-300 max-w-2xl mx-auto">
                        "I'm always open to discussing new projects, creative ideas or opportunities to be part of your vision."
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-5 gap-12">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="lg:col-span-2 section-content">
            <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>
            <div class="space-y-6 mb-10">
                {CONTACT_METHODS
                    .iter()
                    .map(|method| {
                        view! {
                            <a
                                href=method.link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-start p-4 rounded-xl bg-gray-800/50 backdrop-blur-sm border border-gray-700 hover:border-purple-500/50 transition-all duration-300 group"
                            >
                                <div class="p-3 rounded-lg bg-gray-700/50 mr-4 group-hover:bg-purple-900/30 transition-colors duration-300">
                                    <i class=format!("{} text-2xl text-purple-500", method.icon)></i>
                                </div>
                                <div>
                                    <h4 class="text-lg font-medium text-gray-300">{method.title}</h4>
                                    <p class="text-purple-400 group-hover:text-purple-300 transition-colors duration-300">
                                        {method.value}
                                    </p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <h4 class="text-lg font-medium mb-4">"Connect With Me"</h4>
            <div class="flex space-x-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.label
                                class="p-3 rounded-full bg-gray-800 hover:bg-purple-600 text-gray-300 hover:text-white transition-all duration-300"
                            >
                                <i class=social.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let config = site_config();
    let sender = SimulatedSender::new(config.send_latency());
    let dismiss_after = config.status_dismiss();

    let controller = RwSignal::new(SubmissionController::new());
    let fields = RwSignal::new(FormFields::default());
    let busy = move || controller.with(|c| c.is_busy());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let store = SignalStore { controller, fields };
        match submit(sender.clone(), store, dismiss_after) {
            Ok(pending) => spawn_local(async move {
                if !pending.await {
                    log::debug!("contact status superseded before its dismiss");
                }
            }),
            Err(err) => log::log!(err.log_level(), "contact form not submitted: {err}"),
        }
    };

    view! {
        <div class="lg:col-span-3 bg-gray-800/30 backdrop-blur-sm rounded-2xl p-8 border border-gray-700 section-content">
            <h3 class="text-2xl font-bold mb-6">"Send Me a Message"</h3>
            <form on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                    <FormInput field=Field::Name fields />
                    <FormInput field=Field::Email fields />
                </div>
                <div class="mb-6">
                    <FormInput field=Field::Subject fields />
                </div>
                <div class="mb-6">
                    <label
                        for=Field::Message.key()
                        class="block text-sm font-medium text-gray-300 mb-2"
                    >
                        {Field::Message.label()}
                    </label>
                    <textarea
                        id=Field::Message.key()
                        name=Field::Message.key()
                        rows=5
                        required=true
                        placeholder=Field::Message.placeholder()
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=move || fields.with(|f| f.get(Field::Message).to_string())
                        on:input=move |ev| {
                            fields.update(|f| f.set(Field::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=busy
                    class=move || {
                        let base = "w-full flex items-center justify-center gap-2 py-3 px-6 rounded-lg font-medium transition-all duration-300 text-white";
                        if busy() {
                            format!("{base} bg-gray-600 cursor-not-allowed")
                        } else {
                            format!(
                                "{base} bg-purple-600 hover:bg-purple-700 hover:shadow-lg hover:shadow-purple-600/20",
                            )
                        }
                    }
                >
                    {move || {
                        if busy() {
                            Either::Left(
                                view! {
                                    <span class="animate-spin -ml-1 mr-2 h-5 w-5 rounded-full border-4 border-white/25 border-t-white"></span>
                                    "Processing..."
                                },
                            )
                        } else {
                            Either::Right(view! { "Send Message " <span>"➤"</span> })
                        }
                    }}
                </button>
                <StatusBanner controller />
            </form>
        </div>
    }
}

#[component]
fn FormInput(field: Field, fields: RwSignal<FormFields>) -> impl IntoView {
    let is_email = field == Field::Email;
    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-gray-300 mb-2">
                {field.label()}
            </label>
            <input
                type=field.input_type()
                id=field.key()
                name=field.key()
                required=true
                placeholder=field.placeholder()
                pattern=is_email.then_some(EMAIL_INPUT_PATTERN)
                title=is_email.then_some("Please enter a valid email address")
                class=INPUT_CLASS
                prop:value=move || fields.with(|f| f.get(field).to_string())
                on:input=move |ev| fields.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn StatusBanner(controller: RwSignal<SubmissionController>) -> impl IntoView {
    move || {
        controller.with(|c| {
            c.banner().map(|msg| {
                let class = if c.state() == SubmissionState::Success {
                    "mt-4 p-3 bg-green-500/20 border border-green-500/50 rounded-lg text-green-400 text-center banner-enter"
                } else {
                    "mt-4 p-3 bg-red-500/20 border border-red-500/50 rounded-lg text-red-400 text-center banner-enter"
                };
                view! {
                    <div class=class role="status">
                        {msg}
                    </div>
                }
            })
        })
    }
}
