//! Lead capture page: the form until a submission succeeds, then the
//! thank-you notice.

use leptos::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::submitted_notice::SubmittedNotice;
use crate::state::lead_form::LeadFormState;

pub const PAGE_HEADING: &str = "Receive a Phone call from Scallio AI agent";

/// Lead page. Owns the form state and provides it to child components.
#[component]
pub fn LeadPage() -> impl IntoView {
    let form = RwSignal::new(LeadFormState::default());
    provide_context(form);

    view! {
        <Show
            when=move || form.with(|f| f.is_submitted)
            fallback=|| {
                view! {
                    <div class="lead-page">
                        <h1 class="lead-page__heading">{PAGE_HEADING}</h1>
                        <LeadForm/>
                    </div>
                }
            }
        >
            <SubmittedNotice/>
        </Show>
    }
}
