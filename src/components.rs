//! Pure Yew view components for the SteadyCheck UI.
//!
//! These components render from props and keep at most local presentation
//! state (focus styling), so the page logic in `main.rs` stays in one place.

use crate::config::{ERROR_MESSAGE_ID, RESULTS_SECTION_ID};
use steady_check::{SteadyStateLevel, SteadyStateReport, TimeUnit};
use yew::prelude::*;

/// Labelled form group that lifts while any field inside it has focus.
#[derive(Properties, PartialEq)]
pub struct FormGroupProps {
    pub label: AttrValue,
    pub for_id: AttrValue,
    pub children: Children,
}

#[function_component(FormGroup)]
pub fn form_group(props: &FormGroupProps) -> Html {
    let lifted = use_state(|| false);

    let onfocusin = {
        let lifted = lifted.clone();
        Callback::from(move |_: FocusEvent| lifted.set(true))
    };
    let onfocusout = {
        let lifted = lifted.clone();
        Callback::from(move |_: FocusEvent| lifted.set(false))
    };

    html! {
        <div class={classes!("input-group", (*lifted).then_some("lifted"))}
            {onfocusin}
            {onfocusout}
        >
            <label for={props.for_id.clone()}>{ props.label.clone() }</label>
            { for props.children.iter() }
        </div>
    }
}

/// `<option>` list for the half-life unit select.
pub fn render_unit_options(selected: TimeUnit) -> Html {
    TimeUnit::ALL
        .iter()
        .map(|unit| {
            let label = match unit {
                TimeUnit::Minutes => "Minutes",
                TimeUnit::Hours => "Hours",
                TimeUnit::Days => "Days",
            };
            html! {
                <option value={unit.to_string()} selected={*unit == selected}>{ label }</option>
            }
        })
        .collect()
}

/// `<option>` list for the steady-state level select.
pub fn render_level_options(selected_pct: u32) -> Html {
    SteadyStateLevel::ALL
        .iter()
        .map(|level| {
            let pct = level.percent();
            html! {
                <option value={pct.to_string()} selected={pct == selected_pct}>
                    { format!("{}% ({} half-lives)", pct, level.multiplier()) }
                </option>
            }
        })
        .collect()
}

/// Advisory banner for a refused half-life entry.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div id={ERROR_MESSAGE_ID} class="error-message" role="alert">
            { props.message.clone() }
        </div>
    }
}

/// Results panel for a completed calculation.
///
/// `settled` is false for the first frame of a new result, which renders the
/// card scaled down and dimmed; flipping it to true lets the CSS transition
/// bring the card back to full size.
#[derive(Properties, PartialEq)]
pub struct ResultsSectionProps {
    pub report: SteadyStateReport,
    pub settled: bool,
}

#[function_component(ResultsSection)]
pub fn results_section(props: &ResultsSectionProps) -> Html {
    let report = &props.report;
    let card_class = classes!(
        "result-card",
        if props.settled { "settled" } else { "settling" }
    );

    html! {
        <section id={RESULTS_SECTION_ID} class="results-section">
            <div class={card_class}>
                <h2>{ "Time to Steady State" }</h2>
                <div id="steadyStateTime" class="result-value">{ &report.formatted_time }</div>
                <div class="result-details">
                    <div class="result-detail">
                        <span class="detail-label">{ "Half-lives:" }</span>
                        <span id="halfLivesCount">{ &report.half_lives_label }</span>
                    </div>
                    <div class="result-detail">
                        <span class="detail-label">{ "Steady state:" }</span>
                        <span id="steadyStatePercent">{ &report.percentage_label }</span>
                    </div>
                </div>
            </div>
            <div class="clinical-info">
                <h3>{ "Clinical Notes" }</h3>
                <p id="clinicalInfo">{ &report.clinical_summary }</p>
            </div>
        </section>
    }
}
