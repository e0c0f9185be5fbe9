//! Searchable country dial-code dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controlled child of `LeadForm`: it keeps its own open/search state and
//! reports the chosen dial code upward through `on_change`.

use leptos::prelude::*;

use crate::state::dial_codes::DialCode;
use crate::state::selector::{NO_RESULTS_TEXT, SelectorState};

/// Dropdown showing `"<Country> (<code>)"` with a live-filtered country list.
#[component]
pub fn CountryCodeSelector(on_change: Callback<&'static str>) -> impl IntoView {
    let state = RwSignal::new(SelectorState::default());

    let on_select = move |entry: &'static DialCode| {
        if let Some(code) = state.try_update(|s| s.select(entry)) {
            on_change.run(code);
        }
    };

    let chevron_class = move || {
        if state.with(|s| s.is_open) {
            "country-select__chevron country-select__chevron--open"
        } else {
            "country-select__chevron"
        }
    };

    view! {
        <div class="country-select">
            <button
                type="button"
                class="country-select__trigger"
                on:click=move |_| state.update(SelectorState::toggle)
            >
                <span>{move || state.with(SelectorState::trigger_label)}</span>
                <span class=chevron_class aria-hidden="true">"▾"</span>
            </button>

            <Show when=move || state.with(|s| s.is_open)>
                <div class="country-select__panel">
                    <input
                        class="country-select__search"
                        type="text"
                        placeholder="Search country..."
                        prop:value=move || state.with(|s| s.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.set_search(term));
                        }
                    />
                    {move || {
                        let current = state.get();
                        if current.shows_no_results() {
                            return view! {
                                <div class="country-select__empty">{NO_RESULTS_TEXT}</div>
                            }
                                .into_any();
                        }

                        current
                            .visible()
                            .into_iter()
                            .map(move |entry| {
                                let class = if current.is_selected(entry) {
                                    "country-select__option country-select__option--selected"
                                } else {
                                    "country-select__option"
                                };
                                view! {
                                    <div class=class on:click=move |_| on_select(entry)>
                                        {entry.label()}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
