//! Thank-you panel shown after a successful submission.

use leptos::prelude::*;

pub const SUCCESS_TITLE: &str = "Form Submitted Successfully!";
pub const SUCCESS_BODY: &str =
    "Thank you for submitting your details. You should be receiving a call from our AI agent shortly!";

#[component]
pub fn SubmittedNotice() -> impl IntoView {
    view! {
        <div class="submitted-notice">
            <span class="submitted-notice__check" aria-hidden="true">"✔"</span>
            <h2 class="submitted-notice__title">{SUCCESS_TITLE}</h2>
            <p class="submitted-notice__body">{SUCCESS_BODY}</p>
        </div>
    }
}
