//! Contact channels and an inquiry form.
//!
//! The form validates locally and shows a confirmation. Nothing is sent
//! anywhere; visitors are pointed at the email and phone channels.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::company;
use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::state::theme::use_theme;
use crate::util::motion::{Motion, stagger};

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Trimmed form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Trim and validate raw form input.
///
/// # Errors
///
/// Returns the message to show for the first field that fails.
pub fn validate_inquiry(name: &str, email: &str, company: &str, message: &str) -> Result<Inquiry, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() {
        return Err("Please enter your name.");
    }
    if !looks_like_email(email) {
        return Err("Please enter a valid email address.");
    }
    let chars = message.chars().count();
    if chars < MIN_MESSAGE_CHARS {
        return Err("Please tell us a little more (at least 10 characters).");
    }
    if chars > MAX_MESSAGE_CHARS {
        return Err("Please keep your message under 2000 characters.");
    }
    Ok(Inquiry {
        name: name.to_owned(),
        email: email.to_owned(),
        company: company.trim().to_owned(),
        message: message.to_owned(),
    })
}

struct Channel {
    icon: IconKind,
    title: &'static str,
    value: &'static str,
}

const CHANNELS: &[Channel] = &[
    Channel { icon: IconKind::MapPin, title: "Visit Us", value: company::ADDRESS },
    Channel { icon: IconKind::Phone, title: "Call Us", value: company::PHONE },
    Channel { icon: IconKind::Mail, title: "Email Us", value: company::EMAIL },
    Channel { icon: IconKind::Clock, title: "Business Hours", value: company::HOURS },
];

#[component]
fn FormField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let theme = use_theme();
    let input_class =
        move || format!("w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 focus:ring-red-500 {}", theme.palette().input);
    let control = if multiline {
        view! {
            <textarea
                class=input_class
                rows="5"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class=input_class
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };
    view! {
        <label class="block">
            <span class=move || format!("block mb-2 text-sm font-medium {}", theme.palette().heading)>{label}</span>
            {control}
        </label>
    }
}

#[component]
fn InquiryForm() -> impl IntoView {
    let theme = use_theme();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let org = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_inquiry(&name.get(), &email.get(), &org.get(), &message.get()) {
            Ok(inquiry) => {
                error.set(None);
                sent_to.set(Some(inquiry.name));
                for field in [name, email, org, message] {
                    field.set(String::new());
                }
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class=move || format!("p-8 rounded-xl {}", theme.palette().card)>
            <Show
                when=move || sent_to.get().is_some()
                fallback=move || {
                    view! {
                        <form class="space-y-6" on:submit=on_submit novalidate=true>
                            <FormField label="Name" value=name/>
                            <FormField label="Email" kind="email" value=email/>
                            <FormField label="Company" value=org/>
                            <FormField label="Message" value=message multiline=true/>
                            {move || {
                                error
                                    .get()
                                    .map(|msg| {
                                        view! {
                                            <p class=move || format!("text-sm {}", theme.palette().accent_text) role="alert">
                                                {msg}
                                            </p>
                                        }
                                    })
                            }}
                            <button
                                type="submit"
                                class=move || {
                                    format!(
                                        "inline-flex items-center gap-2 px-6 py-3 rounded-lg font-medium transition-colors {}",
                                        theme.palette().button_primary,
                                    )
                                }
                            >
                                <Icon kind=IconKind::Send class="w-5 h-5"/>
                                "Send Message"
                            </button>
                        </form>
                    }
                }
            >
                <div class="text-center py-8" role="status">
                    <div class=move || format!("inline-flex mb-4 {}", theme.palette().accent_text)>
                        <Icon kind=IconKind::CheckCircle class="w-12 h-12"/>
                    </div>
                    <h3 class=move || format!("text-2xl font-semibold mb-2 {}", theme.palette().heading)>
                        {move || format!("Thank you, {}!", sent_to.get().unwrap_or_default())}
                    </h3>
                    <p class=move || theme.palette().body>
                        "Your details are ready. To reach our team right away, email "
                        <a href=format!("mailto:{}", company::EMAIL) class="underline">{company::EMAIL}</a>
                        " or call " {company::PHONE} "."
                    </p>
                    <button
                        type="button"
                        class=move || format!("mt-6 px-5 py-2 rounded-full text-sm {}", theme.palette().chip)
                        on:click=move |_| sent_to.set(None)
                    >
                        "Write another message"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Get in Touch"
                    subtitle="Tell us about your product and we'll recommend the right packaging"
                />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-12">
                    <div class="space-y-6">
                        {CHANNELS
                            .iter()
                            .enumerate()
                            .map(|(i, channel)| {
                                view! {
                                    <Reveal motion=Motion::slide_x(-20.0).delay(stagger(i, 100))>
                                        <div class=move || format!("flex items-start gap-4 p-5 rounded-xl {}", theme.palette().card)>
                                            <div class=move || {
                                                format!(
                                                    "w-12 h-12 shrink-0 rounded-full flex items-center justify-center {} {}",
                                                    theme.palette().accent_soft,
                                                    theme.palette().accent_text,
                                                )
                                            }>
                                                <Icon kind=channel.icon class="w-6 h-6"/>
                                            </div>
                                            <div>
                                                <h3 class=move || format!("font-semibold {}", theme.palette().heading)>
                                                    {channel.title}
                                                </h3>
                                                <p class=move || theme.palette().body>{channel.value}</p>
                                            </div>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Reveal motion=Motion::slide_x(20.0) class="lg:col-span-2">
                        <InquiryForm/>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
