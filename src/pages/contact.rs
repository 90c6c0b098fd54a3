use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::email::{start_submission, EmailJsClient};
use crate::contact::form::{BannerCountdown, ContactForm, Field, FormAction, Outcome, Subject};

/// Value of whichever form control fired `e`.
fn control_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);

    let countdown = use_mut_ref(BannerCountdown::<Timeout>::new);

    {
        let countdown = countdown.clone();
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |banner_id: &Option<u64>| {
                let weak = Rc::downgrade(&countdown);
                countdown.borrow_mut().track(*banner_id, move |id, delay| {
                    Timeout::new(delay, move || {
                        let Some(countdown) = weak.upgrade() else {
                            return;
                        };
                        let cleared = countdown.borrow_mut().timer_fired(id);
                        if let Some(banner) = cleared {
                            dispatcher.dispatch(FormAction::ClearBanner(banner));
                        }
                    })
                });
                || ()
            },
            form.banner_id(),
        );
    }

    {
        let countdown = countdown.clone();
        use_effect_with_deps(move |_| move || countdown.borrow_mut().teardown(), ());
    }

    let edit = |field: Field| {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(value) = control_value(&e) {
                form.dispatch(FormAction::Edit(field, value));
            }
        })
    };
    let edit_text = |field: Field| {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = control_value(&e) {
                form.dispatch(FormAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let sender = EmailJsClient::new(config::emailjs());
            match start_submission(&form, sender, Utc::now()) {
                Ok(delivery) => {
                    form.dispatch(FormAction::Started);
                    let form = form.dispatcher();
                    spawn_local(async move {
                        let outcome = delivery.await;
                        form.dispatch(FormAction::Finished(outcome));
                    });
                }
                Err(err) => {
                    warn!("Contact form not sent: {}", err);
                    form.dispatch(FormAction::Rejected(err));
                }
            }
        })
    };

    let sending = form.sending;
    let fields = &form.fields;
    let banner = form.banner().map(|outcome| match outcome {
        Outcome::Sent => html! {
            <div class="form-banner success">
                {"Thank you! Your message has been sent successfully. We'll get back to you soon."}
            </div>
        },
        Outcome::Failed => html! {
            <div class="form-banner failure">
                {"Failed to send message. Please try again or contact us directly."}
            </div>
        },
    });

    html! {
        <section id="contact" class="contact">
            <div class="container two-columns">
                <div>
                    <h4 class="eyebrow">{"START A PROJECT"}</h4>
                    <h2>{"Let's build your"}<br />{"dream home together."}</h2>
                    <p class="muted">
                        {"From planning to execution, we're here to make your construction journey smooth and hassle-free."}
                    </p>
                    <ul class="contact-details">
                        <li>
                            <span class="muted">{"Location"}</span>
                            <strong>{"Lakshmi Nagar, Pollachi 642001"}</strong>
                            <span class="muted">{"Pollachi | Coimbatore"}</span>
                        </li>
                        <li>
                            <span class="muted">{"Phone"}</span>
                            <a href="tel:8973636860" data-interactive="true">{"8973636860"}</a>
                        </li>
                        <li>
                            <span class="muted">{"Email"}</span>
                            <a href="mailto:msbuildersdesignpollachi12@gmail.com" data-interactive="true">
                                {"msbuildersdesignpollachi12@gmail.com"}
                            </a>
                        </li>
                        <li>
                            <span class="muted">{"Instagram"}</span>
                            <a
                                href="https://www.instagram.com/_ms_builders_design_/"
                                target="_blank"
                                rel="noopener noreferrer"
                                data-interactive="true"
                            >
                                {"@_ms_builders_design_"}
                            </a>
                        </li>
                    </ul>
                </div>

                <form class="contact-form" {onsubmit} novalidate=true>
                    { for banner }
                    if let Some(err) = &form.rejection {
                        <div class="form-banner failure">{err.to_string()}</div>
                    }
                    <div class="form-row">
                        <label for="contact-name">{"Your Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            value={fields.name.clone()}
                            oninput={edit_text(Field::Name)}
                            disabled={sending}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-email">{"Email Address"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            value={fields.email.clone()}
                            oninput={edit_text(Field::Email)}
                            disabled={sending}
                        />
                    </div>
                    <div class="form-row">
                        <label for="contact-subject">{"Subject"}</label>
                        <select id="contact-subject" onchange={edit(Field::Subject)} disabled={sending}>
                            { for Subject::ALL.into_iter().map(|subject| html! {
                                <option
                                    value={subject.label()}
                                    selected={subject == fields.subject}
                                >
                                    {subject.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-row">
                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            value={fields.message.clone()}
                            oninput={edit_text(Field::Message)}
                            disabled={sending}
                        />
                    </div>
                    <button type="submit" class="primary-button" disabled={sending} data-interactive="true">
                        { if sending { "SENDING..." } else { "SEND MESSAGE" } }
                    </button>
                </form>
            </div>
            <style>
                {r#"
                    .contact {
                        padding: 6rem 0;
                        background: #ffffff;
                    }
                    .contact-details {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-details li {
                        display: flex;
                        flex-direction: column;
                    }
                    .contact-details a {
                        color: #1e293b;
                        font-weight: 500;
                        word-break: break-all;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                        padding: 2.5rem;
                        border-top: 4px solid #3b82f6;
                        background: #f8fafc;
                        box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1);
                    }
                    .form-row {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .form-row label {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: #475569;
                    }
                    .form-row input,
                    .form-row select,
                    .form-row textarea {
                        padding: 0.75rem 0;
                        border: none;
                        border-bottom: 2px solid #cbd5e1;
                        background: transparent;
                        font: inherit;
                    }
                    .form-row input:focus,
                    .form-row select:focus,
                    .form-row textarea:focus {
                        outline: none;
                        border-bottom-color: #3b82f6;
                    }
                    .form-banner {
                        padding: 1rem;
                        border-radius: 0.5rem;
                    }
                    .form-banner.success {
                        background: #dcfce7;
                        color: #166534;
                    }
                    .form-banner.failure {
                        background: #fee2e2;
                        color: #991b1b;
                    }
                "#}
            </style>
        </section>
    }
}
