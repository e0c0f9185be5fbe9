//! Lead capture form: four inputs, dial-code selector, submit button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<LeadFormState>`. `submit::begin`
//! runs the checks and spends the attempt synchronously in the submit
//! handler; the two network steps run in a spawned local task that calls
//! `submit::settle` when done.

use leptos::prelude::*;

use crate::components::country_code_selector::CountryCodeSelector;
use crate::net::submit;
use crate::state::lead_form::{LeadField, LeadFormState};
use crate::util::storage::BrowserStorage;

/// The lead form. Renders nothing special on success; the page swaps it out.
#[component]
pub fn LeadForm() -> impl IntoView {
    let form = expect_context::<RwSignal<LeadFormState>>();

    let on_dial_code = Callback::new(move |code: &'static str| {
        form.update(|f| f.set_dial_code(code));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(started) = form.try_update(|f| submit::begin(f, &BrowserStorage)) else {
            return;
        };
        let submission = match started {
            Ok(submission) => submission,
            Err(e) => {
                if let Some(prompt) = e.prompt() {
                    crate::util::dialog::alert(prompt);
                }
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = submit::dispatch(&submission, &submit::HttpGateway).await;
            form.update(|f| submit::settle(f, &result));
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    };

    let submitting = move || form.with(|f| f.is_submitting);

    view! {
        <form class="lead-form" on:submit=on_submit>
            <FieldRow field=LeadField::Name icon="👤">
                <FieldInput field=LeadField::Name/>
            </FieldRow>
            <FieldRow field=LeadField::Email icon="✉">
                <FieldInput field=LeadField::Email/>
            </FieldRow>
            <FieldRow field=LeadField::Phone icon="☎">
                <div class="lead-form__phone">
                    <CountryCodeSelector on_change=on_dial_code/>
                    <FieldInput field=LeadField::Phone/>
                </div>
            </FieldRow>
            <FieldRow field=LeadField::Industry icon="💼">
                <FieldInput field=LeadField::Industry/>
            </FieldRow>

            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="lead-form__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>

            <button class="btn btn--primary lead-form__submit" type="submit" disabled=submitting>
                <Show
                    when=submitting
                    fallback=|| view! { <span class="lead-form__icon" aria-hidden="true">"➤"</span> }
                >
                    <span class="lead-form__spinner" aria-hidden="true"></span>
                </Show>
                {move || form.with(LeadFormState::submit_label)}
            </button>
        </form>
    }
}

/// Label plus input slot for one field.
#[component]
fn FieldRow(field: LeadField, icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="lead-form__row">
            <label class="lead-form__label" for=field.input_name()>
                <span class="lead-form__icon" aria-hidden="true">{icon}</span>
                {field.label()}
                <span class="lead-form__required">"*"</span>
            </label>
            {children()}
        </div>
    }
}

/// Text input bound to one field of the shared form state.
#[component]
fn FieldInput(field: LeadField) -> impl IntoView {
    let form = expect_context::<RwSignal<LeadFormState>>();

    view! {
        <input
            class="lead-form__input"
            type=field.input_type()
            id=field.input_name()
            name=field.input_name()
            required=true
            prop:value=move || form.with(|f| f.values.get(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.update_field(field, value));
            }
        />
    }
}
