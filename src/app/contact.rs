use leptos::{html::Input, prelude::*};

use crate::contact::ContactStatus;
#[cfg(feature = "ssr")]
use crate::contact::{ContactError, ContactSubmission, EmailConfig, EmailRelay};

#[cfg(feature = "ssr")]
fn to_server_error(err: ContactError) -> ServerFnError {
    ServerFnError::new(err)
}

#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    let submission = ContactSubmission::new(&name, &email, &message).map_err(to_server_error)?;
    let config = use_context::<EmailConfig>().ok_or_else(|| {
        tracing::error!("contact form submitted but email relay is not configured");
        to_server_error(ContactError::NotConfigured)
    })?;
    let relay = EmailRelay::new(&config).map_err(to_server_error)?;
    relay.send(&submission).await.map_err(|err| {
        tracing::error!(error = %err, "email relay failed");
        to_server_error(err)
    })?;
    tracing::debug!(from = %submission.email, "contact message relayed");
    Ok(())
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let name_ref = NodeRef::<Input>::new();
    let email_ref = NodeRef::<Input>::new();
    let message_ref = NodeRef::<Input>::new();
    let send = ServerAction::<SendContactMessage>::new();

    let status = Memo::new(move |_| {
        let pending = send.pending().get();
        send.value()
            .with(|last| ContactStatus::from_action(pending, last.as_ref()))
    });

    // one-shot reaction to each finished send
    Effect::watch(
        move || status.get(),
        move |status, _, _| {
            match status {
                ContactStatus::Failed => {
                    if let Some(Err(err)) = send.value().get_untracked() {
                        log::error!("contact form send failed: {err}");
                    }
                }
                s if s.clears_fields() => {
                    for input in [name_ref, email_ref, message_ref] {
                        if let Some(el) = input.get_untracked() {
                            el.set_value("");
                        }
                    }
                }
                _ => {}
            }
        },
        false,
    );

    view! {
        <section
            id="contact"
            class="min-h-[40rem] w-full rounded-md bg-neutral-950 relative flex flex-col items-center justify-center antialiased overflow-hidden"
        >
            <div class="absolute inset-0 z-0 background-beams"></div>
            <div class="max-w-2xl mx-auto p-6 relative z-10">
                <h1 class="text-lg md:text-7xl bg-clip-text text-transparent bg-gradient-to-b from-neutral-200 to-neutral-600 text-center font-sans font-bold">
                    "Contact Me"
                </h1>
                <p class="text-neutral-500 max-w-lg mx-auto my-4 text-sm md:text-base text-center">
                    "Lets connect and create something amazing together."
                </p>

                <form
                    class="flex flex-col md:flex-row gap-4 mt-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        if status.get_untracked().submit_disabled() {
                            return;
                        }
                        let value = |r: NodeRef<Input>| {
                            r.get_untracked().map(|el| el.value()).unwrap_or_default()
                        };
                        send.dispatch(SendContactMessage {
                            name: value(name_ref),
                            email: value(email_ref),
                            message: value(message_ref),
                        });
                    }
                >
                    <input
                        node_ref=name_ref
                        type="text"
                        name="name"
                        placeholder="Say Hi! enter your Name"
                        required
                        class="rounded-lg border p-3 border-neutral-800 focus:ring-2 focus:ring-teal-500 w-full bg-neutral-950 placeholder:text-neutral-700"
                    />
                    <input
                        node_ref=email_ref
                        type="email"
                        name="email"
                        placeholder="Enter your email here"
                        required
                        class="rounded-lg border p-3 border-neutral-800 focus:ring-2 focus:ring-teal-500 w-full bg-neutral-950 placeholder:text-neutral-700"
                    />
                    <input
                        node_ref=message_ref
                        type="text"
                        name="message"
                        placeholder="Enter your message here"
                        required
                        class="rounded-lg border p-3 border-neutral-800 focus:ring-2 focus:ring-teal-500 w-full bg-neutral-950 placeholder:text-neutral-700"
                    />
                    <button
                        type="submit"
                        disabled=move || status.get().submit_disabled()
                        class="bg-gradient-to-r from-teal-500 to-teal-700 text-white rounded-lg py-3 px-6 font-medium hover:opacity-90 transition-opacity disabled:opacity-50"
                    >
                        {move || status.get().button_label()}
                    </button>
                </form>

                {move || {
                    status
                        .get()
                        .message()
                        .map(|msg| {
                            view! { <p class="text-sm text-center text-teal-400 mt-3">{msg}</p> }
                        })
                }}

                <p class="text-neutral-700 text-xs mt-3 text-center">
                    "I respect your privacy. No spam, ever."
                </p>
            </div>
        </section>
    }
}
