use leptos::{either::Either, prelude::*, task::spawn_local};

#[cfg(feature = "ssr")]
use crate::contact::{MailRelay, SubmitError};
#[cfg(feature = "ssr")]
use crate::relay::Relay;

use crate::contact::{ContactForm, Field, RelayError, SubmissionController, SubmissionStatus};
use crate::content::{portfolio, Anchor};

use super::section::{icon, Section, SectionHeader};

#[server]
pub async fn send_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    let relay = use_context::<Relay>()
        .ok_or_else(|| ServerFnError::new(RelayError::Unavailable.to_string()))?;
    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    if !form.is_complete() {
        let err = SubmitError::Incomplete(form.missing_fields());
        tracing::warn!("rejected contact message: {err}");
        return Err(ServerFnError::new(err.to_string()));
    }
    relay.send(&form).await.map_err(|e| {
        tracing::error!(relay = relay.kind(), "contact relay failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let details = &portfolio().contact;

    view! {
        <Section anchor=Anchor::Contact shaded=true>
            <SectionHeader eyebrow="05. Get In Touch" title="Contact" accent="Me" />
            <p class="text-dark-300 text-lg -mt-10 mb-16 max-w-2xl mx-auto text-center">
                {details.blurb.clone()}
            </p>
            <div class="grid lg:grid-cols-2 gap-8 lg:gap-12">
                <MessageForm />
                <div class="space-y-6">
                    <div class="space-y-4 stagger">
                        {details
                            .cards
                            .iter()
                            .map(|card| {
                                let external = card.is_external();
                                view! {
                                    <a
                                        href=card.href.clone()
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        class="card flex items-center gap-4 group hover:translate-x-1 transition-transform"
                                    >
                                        <div class=format!(
                                            "w-14 h-14 rounded-lg bg-gradient-to-br {} flex items-center justify-center group-hover:scale-110 transition-transform",
                                            card.color,
                                        )>
                                            <i class=format!("{} text-white text-2xl", icon(&card.icon)) />
                                        </div>
                                        <div>
                                            <p class="text-dark-400 text-sm">{card.label.clone()}</p>
                                            <p class="text-dark-100 font-semibold">{card.value.clone()}</p>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="card">
                        <h3 class="text-xl font-bold mb-4 gradient-text">"Connect With Me"</h3>
                        <div class="flex gap-4">
                            {portfolio()
                                .profile
                                .socials
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-12 h-12 rounded-lg bg-white/5 border border-white/10 flex items-center justify-center text-dark-300 hover:text-primary-400 transition-colors text-xl"
                                            aria-label=s.label.clone()
                                        >
                                            <i class=icon(&s.icon) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="card bg-gradient-to-br from-primary-500/10 to-purple-500/10 border-primary-500/30">
                        <div class="flex items-start gap-4">
                            <div class="w-3 h-3 rounded-full bg-green-500 animate-pulse mt-1"></div>
                            <div>
                                <h3 class="text-xl font-bold mb-2 text-dark-50">
                                    {details.availability.title.clone()}
                                </h3>
                                <p class="text-dark-300">{details.availability.text.clone()}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let controller = RwSignal::new(SubmissionController::default());

    let submit = move || {
        let current = form.get_untracked();
        let payload = match controller.try_update(|c| c.begin(&current)) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                log::warn!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let ContactForm {
                name,
                email,
                subject,
                message,
            } = payload;
            let outcome = send_contact(name, email, subject, message)
                .await
                .map_err(|e| RelayError::Server(e.to_string()));
            let delivered = outcome.is_ok();
            controller.update(|c| {
                c.finish(outcome);
            });
            if delivered {
                set_form.set(ContactForm::default());
            }
        });
    };

    view! {
        <div class="card">
            <h3 class="text-xl sm:text-2xl font-bold mb-4 sm:mb-6 gradient-text">"Send a Message"</h3>
            <form
                class="space-y-4 sm:space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <FormField field=Field::Name input_type="text" placeholder="Your name" form set_form />
                <FormField
                    field=Field::Email
                    input_type="email"
                    placeholder="your.email@example.com"
                    form
                    set_form
                />
                <FormField
                    field=Field::Subject
                    input_type="text"
                    placeholder="What's this about?"
                    form
                    set_form
                />
                <FormField
                    field=Field::Message
                    input_type="textarea"
                    placeholder="Your message here..."
                    form
                    set_form
                />
                {move || {
                    controller
                        .with(|c| match c.status() {
                            SubmissionStatus::Success(msg) => Some((true, msg.clone())),
                            SubmissionStatus::Error(msg) => Some((false, msg.clone())),
                            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
                        })
                        .map(|(ok, msg)| {
                            let class = if ok {
                                "p-4 rounded-lg fade-in bg-green-500/20 border border-green-500/50 text-green-400"
                            } else {
                                "p-4 rounded-lg fade-in bg-red-500/20 border border-red-500/50 text-red-400"
                            };
                            view! { <div class=class>{msg}</div> }
                        })
                }}
                <button
                    type="submit"
                    disabled=move || controller.with(|c| !c.trigger_enabled())
                    class="w-full btn-primary flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || {
                        if controller.with(SubmissionController::is_pending) {
                            Either::Left(
                                view! {
                                    <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                    "Sending..."
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <i class=icon("send") />
                                    "Send Message"
                                },
                            )
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    form: ReadSignal<ContactForm>,
    set_form: WriteSignal<ContactForm>,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        set_form.update(|f| f.set(field, event_target_value(&ev)));
    };
    let class = "w-full px-4 py-3 bg-dark-700 border border-dark-600 rounded-lg text-dark-50 focus:outline-none focus:border-primary-500 transition-colors";

    view! {
        <div>
            <label for=field.name() class="block text-dark-200 font-medium mb-2">
                {field.label()}
            </label>
            {if input_type == "textarea" {
                Either::Left(
                    view! {
                        <textarea
                            id=field.name()
                            name=field.name()
                            rows="5"
                            required=true
                            placeholder=placeholder
                            class=format!("{class} resize-none")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=input_type
                            id=field.name()
                            name=field.name()
                            required=true
                            placeholder=placeholder
                            class=class
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        </div>
    }
}
