use log::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use wasm_bindgen::prelude::*;

pub mod utils;

/// Default calculation parameters
pub mod defaults {
    /// Largest accepted half-life, in whatever unit the user entered it.
    pub const MAX_HALF_LIFE: f64 = 1000.0;
    /// Half-life multiplier for percentages outside the lookup table.
    pub const DEFAULT_MULTIPLIER: f64 = 5.0;

    pub const MINUTES_PER_HOUR: f64 = 60.0;
    pub const HOURS_PER_DAY: f64 = 24.0;
    pub const HOURS_PER_WEEK: f64 = 168.0;
}

// ──────────────────────────────────────────────────────────────────────────────
// Inputs

/// Unit the half-life was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Minutes, TimeUnit::Hours, TimeUnit::Days];

    /// Form value for this unit.
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TimeUnit::ALL.into_iter().find(|unit| unit.name() == name)
    }

    pub fn to_hours(self, value: f64) -> f64 {
        match self {
            TimeUnit::Minutes => value / defaults::MINUTES_PER_HOUR,
            TimeUnit::Hours => value,
            TimeUnit::Days => value * defaults::HOURS_PER_DAY,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::from_name(s).ok_or_else(|| format!("Unknown time unit: {}", s))
    }
}

/// Supported steady-state targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteadyStateLevel {
    P90,
    P95,
    P97,
    P99,
}

/// Percentage → number of half-lives needed to reach it.
///
/// This is the usual bedside rule of thumb (time to steady state is roughly
/// multiplier × half-life), not a pharmacokinetic model.
const MULTIPLIER_TABLE: [(SteadyStateLevel, u32, f64); 4] = [
    (SteadyStateLevel::P90, 90, 3.3),
    (SteadyStateLevel::P95, 95, 4.3),
    (SteadyStateLevel::P97, 97, 5.0),
    (SteadyStateLevel::P99, 99, 6.6),
];

impl SteadyStateLevel {
    pub const ALL: [SteadyStateLevel; 4] = [
        SteadyStateLevel::P90,
        SteadyStateLevel::P95,
        SteadyStateLevel::P97,
        SteadyStateLevel::P99,
    ];

    fn entry(self) -> (SteadyStateLevel, u32, f64) {
        // Every level has exactly one table row.
        MULTIPLIER_TABLE[self as usize]
    }

    pub fn percent(self) -> u32 {
        self.entry().1
    }

    pub fn multiplier(self) -> f64 {
        self.entry().2
    }

    pub fn from_percent(percentage: u32) -> Option<Self> {
        MULTIPLIER_TABLE
            .iter()
            .find(|(_, pct, _)| *pct == percentage)
            .map(|(level, _, _)| *level)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Errors

/// Reasons a half-life entry is refused before any calculation runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a number, zero, negative, or not finite.
    #[error("Please enter a valid half-life value greater than 0")]
    InvalidValue,
    /// Above `defaults::MAX_HALF_LIFE` in the entered unit.
    #[error("Half-life value seems unusually high. Please verify.")]
    UnusuallyHigh,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidValue => "InvalidValue",
            ValidationError::UnusuallyHigh => "UnusuallyHigh",
        }
    }
}

/// Serializable form of a `ValidationError` for the JS boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    pub kind: &'static str,
    pub message: String,
}

impl From<ValidationError> for ValidationFailure {
    fn from(err: ValidationError) -> Self {
        ValidationFailure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Engine

/// Check a raw half-life entry and return its numeric value.
///
/// The text is read like the browser's `parseFloat`: leading number wins,
/// trailing text is ignored. The upper bound applies to the value as entered,
/// before unit conversion.
pub fn validate(raw_half_life: &str) -> Result<f64, ValidationError> {
    let value = utils::parse_float_prefix(raw_half_life)
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(ValidationError::InvalidValue)?;

    if value > defaults::MAX_HALF_LIFE {
        return Err(ValidationError::UnusuallyHigh);
    }

    Ok(value)
}

pub fn convert_to_hours(value: f64, unit: TimeUnit) -> f64 {
    unit.to_hours(value)
}

/// Same as [`convert_to_hours`] for a unit given by name. Unknown names leave
/// the value untouched.
pub fn convert_named_to_hours(value: f64, unit: &str) -> f64 {
    match TimeUnit::from_name(unit) {
        Some(unit) => unit.to_hours(value),
        None => value,
    }
}

/// Number of half-lives to reach `percentage` steady state.
///
/// Falls back to `defaults::DEFAULT_MULTIPLIER` for percentages the table
/// does not list.
pub fn multiplier_for(percentage: u32) -> f64 {
    SteadyStateLevel::from_percent(percentage)
        .map_or(defaults::DEFAULT_MULTIPLIER, SteadyStateLevel::multiplier)
}

pub fn compute_steady_state_hours(half_life_hours: f64, percentage: u32) -> f64 {
    half_life_hours * multiplier_for(percentage)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn pluralize(quantity: f64, unit: &str) -> String {
    let suffix = if quantity == 1.0 { "" } else { "s" };
    format!("{} {}{}", quantity, unit, suffix)
}

/// Render an elapsed time in hours as minutes, hours, or days.
///
/// In the combined branch the whole-day count is `floor` of the rounded
/// one-decimal day count while the hour part is rounded separately, so
/// values just under a day boundary read as e.g. "2 days 24 hours".
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        let minutes = (hours * defaults::MINUTES_PER_HOUR).round();
        return pluralize(minutes, "minute");
    }

    if hours < defaults::HOURS_PER_DAY {
        return pluralize(round_to_tenth(hours), "hour");
    }

    let days = round_to_tenth(hours / defaults::HOURS_PER_DAY);
    let remaining_hours = (hours % defaults::HOURS_PER_DAY).round();
    if remaining_hours == 0.0 {
        pluralize(days, "day")
    } else {
        format!(
            "{} {}",
            pluralize(days.floor(), "day"),
            pluralize(remaining_hours, "hour")
        )
    }
}

/// Qualitative bucket for how long therapy takes to reach steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    FirstDay,
    FirstThreeDays,
    FirstWeek,
    BeyondWeek,
}

impl TimeBucket {
    pub fn for_hours(steady_state_hours: f64) -> Self {
        if steady_state_hours < defaults::HOURS_PER_DAY {
            TimeBucket::FirstDay
        } else if steady_state_hours < 3.0 * defaults::HOURS_PER_DAY {
            TimeBucket::FirstThreeDays
        } else if steady_state_hours < defaults::HOURS_PER_WEEK {
            TimeBucket::FirstWeek
        } else {
            TimeBucket::BeyondWeek
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TimeBucket::FirstDay => "Steady state will be reached within the first day of therapy. ",
            TimeBucket::FirstThreeDays => "Steady state will be reached within 2-3 days of therapy. ",
            TimeBucket::FirstWeek => "Steady state will be reached within the first week of therapy. ",
            TimeBucket::BeyondWeek => {
                "Steady state will take more than a week to achieve. Consider loading dose if appropriate. "
            }
        }
    }
}

const MONITORING_ADVICE: &str =
    "This is the optimal time for therapeutic drug monitoring and dosage adjustments.";

/// Assemble the clinical note shown under the result.
pub fn build_clinical_summary(drug_name: &str, steady_state_hours: f64, percentage: u32) -> String {
    let body = format!(
        "At {}% steady state, the drug concentration will be relatively stable. {}{}",
        percentage,
        TimeBucket::for_hours(steady_state_hours).message(),
        MONITORING_ADVICE
    );

    let drug_name = drug_name.trim();
    if drug_name.is_empty() {
        body
    } else {
        format!("For {}: {}", drug_name, body)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Whole calculation

/// Raw form values for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateRequest {
    pub drug_name: String,
    pub half_life: String,
    pub unit: TimeUnit,
    pub percentage: u32,
}

/// Everything the results panel shows for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteadyStateReport {
    pub drug_name: Option<String>,
    pub half_life_hours: f64,
    pub percentage: u32,
    pub multiplier: f64,
    pub steady_state_hours: f64,
    pub formatted_time: String,
    pub half_lives_label: String,
    pub percentage_label: String,
    pub clinical_summary: String,
}

fn build_report(
    drug_name: &str,
    half_life_hours: f64,
    percentage: u32,
) -> SteadyStateReport {
    let multiplier = multiplier_for(percentage);
    let steady_state_hours = compute_steady_state_hours(half_life_hours, percentage);
    debug!(
        "Steady state: {} h half-life x {} = {} h at {}%",
        half_life_hours, multiplier, steady_state_hours, percentage
    );

    let trimmed = drug_name.trim();
    SteadyStateReport {
        drug_name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        half_life_hours,
        percentage,
        multiplier,
        steady_state_hours,
        formatted_time: format_duration(steady_state_hours),
        half_lives_label: format!("{} half-lives", multiplier),
        percentage_label: format!("{}%", percentage),
        clinical_summary: build_clinical_summary(drug_name, steady_state_hours, percentage),
    }
}

/// Validate, convert, multiply and format in one pass.
pub fn calculate(request: &SteadyStateRequest) -> Result<SteadyStateReport, ValidationError> {
    let value = validate(&request.half_life)?;
    let half_life_hours = convert_to_hours(value, request.unit);
    Ok(build_report(&request.drug_name, half_life_hours, request.percentage))
}

/// JS entry point for hosts that drive their own page.
///
/// # Arguments
/// * `drug_name` - Optional label, may be empty
/// * `half_life` - Raw half-life text as typed
/// * `unit` - `"minutes"`, `"hours"` or `"days"`; other names are taken as hours
/// * `percentage` - Steady-state target
///
/// # Returns
/// Serialized `SteadyStateReport`, or `{ kind, message }` when the half-life
/// is refused
#[wasm_bindgen]
pub fn calculate_steady_state(
    drug_name: &str,
    half_life: &str,
    unit: &str,
    percentage: u32,
) -> JsValue {
    let outcome = validate(half_life).map(|value| {
        build_report(drug_name, convert_named_to_hours(value, unit), percentage)
    });

    match outcome {
        Ok(report) => serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL),
        Err(e) => serde_wasm_bindgen::to_value(&ValidationFailure::from(e))
            .unwrap_or(JsValue::NULL),
    }
}
