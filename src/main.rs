//! Main module for the SteadyCheck application using Yew.
//! Collects form input, runs the steady-state engine and drives the page transitions.

use gloo_timers::callback::Timeout;
use log::{info, warn};
use steady_check::{calculate, utils::parse_int_prefix, SteadyStateReport, SteadyStateRequest, TimeUnit};
use web_sys::{HtmlInputElement, HtmlSelectElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{render_level_options, render_unit_options, ErrorBanner, FormGroup, ResultsSection};
use config::*;
use hooks::use_timed_message;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Smoothly scroll the element with `id` into view, if it is on the page.
fn scroll_into_view(id: &str) {
    if let Some(element) = gloo_utils::document().get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring form state, calculation and results.
#[function_component(Main)]
fn main_component() -> Html {
    let drug_name = use_state(String::new);
    let half_life_text = use_state(String::new);
    let unit = use_state(|| DEFAULT_UNIT);
    let level_pct = use_state(|| DEFAULT_LEVEL_PCT);

    let report = use_state(|| None::<SteadyStateReport>);
    // Bumped on every successful calculation so effects re-run for repeat results
    let result_version = use_state(|| 0usize);
    let settled = use_state(|| true);
    let settle_timer = use_mut_ref(|| None::<Timeout>);
    let error = use_timed_message(ERROR_DISMISS_MS);

    // --- OnInput Handlers ---
    let drug_name_oninput = {
        let drug_name_setter = drug_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            drug_name_setter.set(input.value());
        })
    };
    let half_life_oninput = {
        let half_life_setter = half_life_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            half_life_setter.set(input.value());
        })
    };
    let unit_onchange = {
        let unit_setter = unit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TimeUnit>() {
                Ok(selected) => unit_setter.set(selected),
                Err(e) => warn!("{}", e),
            }
        })
    };
    let level_onchange = {
        let level_setter = level_pct.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_int_prefix(&select.value()).and_then(|pct| u32::try_from(pct).ok()) {
                Some(pct) => level_setter.set(pct),
                None => warn!("Ignoring unparsable steady-state level {:?}", select.value()),
            }
        })
    };

    let run_calculation = {
        let drug_name = drug_name.clone();
        let half_life_text = half_life_text.clone();
        let unit = unit.clone();
        let level_pct = level_pct.clone();
        let report = report.clone();
        let result_version = result_version.clone();
        let settled = settled.clone();
        let show_error = error.show.clone();
        let clear_error = error.clear.clone();
        Callback::from(move |_: ()| {
            clear_error.emit(());

            let request = SteadyStateRequest {
                drug_name: (*drug_name).clone(),
                half_life: (*half_life_text).clone(),
                unit: *unit,
                percentage: *level_pct,
            };

            match calculate(&request) {
                Ok(new_report) => {
                    report.set(Some(new_report));
                    settled.set(false);
                    result_version.set(result_version.wrapping_add(1));
                }
                Err(e) => {
                    warn!("Half-life {:?} rejected: {}", request.half_life, e.kind());
                    show_error.emit(e.to_string());
                }
            }
        })
    };

    let half_life_onkeydown = {
        let commit_handler = run_calculation.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit_handler.emit(());
            }
        })
    };

    // Scroll to a fresh result and let the card settle after a short delay
    {
        let settled = settled.clone();
        let settle_timer = settle_timer.clone();
        use_effect_with(*result_version, move |&version| {
            if version > 0 {
                scroll_into_view(RESULTS_SECTION_ID);
                let handle = Timeout::new(RESULT_SETTLE_MS, move || settled.set(true));
                *settle_timer.borrow_mut() = Some(handle);
            }
            || ()
        });
    }

    // Bring every newly shown error into view, including a repeat of the last one
    use_effect_with(error.shown, move |&shown| {
        if shown > 0 {
            scroll_into_view(ERROR_MESSAGE_ID);
        }
        || ()
    });

    html! {
        <div class="container">
            <header class="header">
                <h1>{ "SteadyCheck" }</h1>
                <p class="subtitle">{ "Estimate time to steady state from a drug's half-life" }</p>
            </header>

            <div class="calculator-section">
                <FormGroup label="Drug name (optional):" for_id="drugName">
                    <input
                        type="text"
                        id="drugName"
                        class="input-field"
                        placeholder="e.g. Vancomycin"
                        value={(*drug_name).clone()}
                        oninput={drug_name_oninput}
                    />
                </FormGroup>

                <FormGroup label="Half-life:" for_id="halfLife">
                    <div class="input-with-unit">
                        <input
                            type="number"
                            id="halfLife"
                            class="input-field"
                            step="any"
                            min="0"
                            placeholder="Enter half-life"
                            value={(*half_life_text).clone()}
                            oninput={half_life_oninput}
                            onkeydown={half_life_onkeydown}
                        />
                        <select id="timeUnit" class="input-field" onchange={unit_onchange}>
                            { render_unit_options(*unit) }
                        </select>
                    </div>
                </FormGroup>

                <FormGroup label="Target steady state:" for_id="steadyStateLevel">
                    <select id="steadyStateLevel" class="input-field" onchange={level_onchange}>
                        { render_level_options(*level_pct) }
                    </select>
                </FormGroup>

                <button id="calculateBtn" class="btn-primary" onclick={run_calculation.reform(|_| ())}>
                    { "Calculate Steady State" }
                </button>

                if let Some(message) = error.message.clone() {
                    <ErrorBanner {message} />
                }
            </div>

            if let Some(current) = (*report).clone() {
                <ResultsSection report={current} settled={*settled} />
            }
        </div>
    }
}

/// Entry point: installs the panic hook and initializes the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
    info!("SteadyCheck loaded successfully");
}
