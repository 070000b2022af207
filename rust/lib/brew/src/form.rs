//! Form step models.
//!
//! Each step of the brewing flow is a [`StepForm`]: it opens a
//! [`FormState`] from optional initial values, validates the raw field
//! values on submit, and hands the typed values to a completion callback.
//! Renderers bind to `FormState` and address inputs by their labels.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::ValidationError;
use crate::options::{self, BrewingProcess, BrewingTechnique, GrindSize, Rating};

/// Field names, as used in `brew/form/update-field` and the API payload.
pub mod field {
    pub const ORIGIN: &str = "origin";
    pub const ROASTER: &str = "roaster";
    pub const TECHNIQUE: &str = "technique";
    pub const PROCESS: &str = "process";
    pub const WATER_DOSE: &str = "waterDose";
    pub const COFFEE_WEIGHT: &str = "coffeeWeight";
    pub const TEMPERATURE: &str = "temperature";
    pub const GRIND_SIZE: &str = "grindSize";
    pub const RATING: &str = "rating";
}

/// Visible label text. Renderers and UI tests match these verbatim.
pub mod label {
    pub const ORIGIN: &str = "Origin";
    pub const ROASTER: &str = "Roaster";
    pub const TECHNIQUE: &str = "Pick technique";
    pub const PROCESS: &str = "Process";
    pub const WATER_DOSE: &str = "Water (ml)";
    pub const COFFEE_WEIGHT: &str = "Coffee weight (g)";
    pub const TEMPERATURE: &str = "Temperature (°C)";
    pub const GRIND_SIZE: &str = "Grind size";
    pub const RATING: &str = "Rating";

    pub const NEW_BREW: &str = "New brew";
    pub const ADD_NEW_BREW: &str = "Add new brew";
    pub const CUSTOMIZE_BREW: &str = "Customize brew";
    pub const RATE: &str = "Rate";
    pub const SAVE_BREW: &str = "Save brew";
}

pub const DEFAULT_WATER_DOSE: &str = "300";
pub const DEFAULT_COFFEE_WEIGHT: &str = "18";
pub const DEFAULT_TEMPERATURE: &str = "95";
pub const DEFAULT_GRIND_SIZE: GrindSize = GrindSize::MediumFine;

// ── Values ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewingBasicsFormValues {
    pub origin: String,
    pub roaster: String,
    pub technique: BrewingTechnique,
    pub process: BrewingProcess,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewingCustomizationFormValues {
    pub water_dose: String,
    pub coffee_weight: String,
    pub temperature: String,
    pub grind_size: GrindSize,
}

/// A typical brew; what the customization step shows before any edit.
impl Default for BrewingCustomizationFormValues {
    fn default() -> Self {
        Self {
            water_dose: DEFAULT_WATER_DOSE.to_string(),
            coffee_weight: DEFAULT_COFFEE_WEIGHT.to_string(),
            temperature: DEFAULT_TEMPERATURE.to_string(),
            grind_size: DEFAULT_GRIND_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewingRatingFormValues {
    pub rating: Rating,
}

// ── Form state ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormStep {
    Basics,
    Customization,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Select { options: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn text(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self { name, label, kind: FieldKind::Text, value: value.into() }
    }

    fn select<E>(name: &'static str, label: &'static str, value: Option<E>) -> Self
    where
        E: IntoEnumIterator + AsRef<str>,
    {
        Self {
            name,
            label,
            kind: FieldKind::Select { options: options::labels::<E>() },
            value: value.map(|v| v.as_ref().to_string()).unwrap_or_default(),
        }
    }
}

/// Raw state of the form for the current step — stored at `brew/form`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub step: FormStep,
    pub fields: Vec<FormField>,
    /// Field name → message, filled by a failed submit.
    pub errors: BTreeMap<String, String>,
    pub submit_label: &'static str,
}

impl FormState {
    pub const PATH: &'static str = "brew/form";

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_by_label(&self, label: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.label == label)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Replace a raw value and clear that field's error.
    ///
    /// Returns `false` if the form has no such field.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(f) => {
                f.value = value.to_string();
                self.errors.remove(name);
                true
            }
            None => false,
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn raw(&self, name: &str) -> &str {
        self.value(name).map(str::trim).unwrap_or("")
    }
}

// ── Step capability ─────────────────────────────────────────────────

/// One step of the brewing flow.
pub trait StepForm {
    type Values;

    const STEP: FormStep;
    const SUBMIT_LABEL: &'static str;

    /// Fields pre-filled from `initial`, or blank when `None`.
    fn fields(initial: Option<&Self::Values>) -> Vec<FormField>;

    /// Parse every field; all failures are reported, not just the first.
    fn validate(form: &FormState) -> Result<Self::Values, Vec<ValidationError>>;

    fn open(initial: Option<&Self::Values>) -> FormState {
        FormState {
            step: Self::STEP,
            fields: Self::fields(initial),
            errors: BTreeMap::new(),
            submit_label: Self::SUBMIT_LABEL,
        }
    }

    /// Validate and, on success, pass the values to `on_submit`.
    ///
    /// On failure the field errors are written to `form` and the callback
    /// is not invoked. Returns whether the step completed.
    fn submit<F>(form: &mut FormState, on_submit: F) -> bool
    where
        F: FnOnce(Self::Values),
    {
        match Self::validate(form) {
            Ok(values) => {
                form.errors.clear();
                on_submit(values);
                true
            }
            Err(errors) => {
                form.errors = errors.into_iter().map(|e| (e.field, e.message)).collect();
                false
            }
        }
    }
}

pub struct BasicsStep;
pub struct CustomizationStep;
pub struct RatingStep;

impl StepForm for BasicsStep {
    type Values = BrewingBasicsFormValues;

    const STEP: FormStep = FormStep::Basics;
    const SUBMIT_LABEL: &'static str = label::CUSTOMIZE_BREW;

    fn fields(initial: Option<&Self::Values>) -> Vec<FormField> {
        vec![
            FormField::text(field::ORIGIN, label::ORIGIN, initial.map(|v| v.origin.as_str()).unwrap_or("")),
            FormField::text(field::ROASTER, label::ROASTER, initial.map(|v| v.roaster.as_str()).unwrap_or("")),
            FormField::select(field::TECHNIQUE, label::TECHNIQUE, initial.map(|v| v.technique)),
            FormField::select(field::PROCESS, label::PROCESS, initial.map(|v| v.process)),
        ]
    }

    fn validate(form: &FormState) -> Result<Self::Values, Vec<ValidationError>> {
        match (
            required_text(form, field::ORIGIN),
            required_text(form, field::ROASTER),
            select::<BrewingTechnique>(form, field::TECHNIQUE),
            select::<BrewingProcess>(form, field::PROCESS),
        ) {
            (Ok(origin), Ok(roaster), Ok(technique), Ok(process)) => Ok(BrewingBasicsFormValues {
                origin,
                roaster,
                technique,
                process,
            }),
            (origin, roaster, technique, process) => Err([
                origin.err(),
                roaster.err(),
                technique.err(),
                process.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

impl StepForm for CustomizationStep {
    type Values = BrewingCustomizationFormValues;

    const STEP: FormStep = FormStep::Customization;
    const SUBMIT_LABEL: &'static str = label::RATE;

    fn fields(initial: Option<&Self::Values>) -> Vec<FormField> {
        let defaults = BrewingCustomizationFormValues::default();
        let v = initial.unwrap_or(&defaults);
        vec![
            FormField::text(field::WATER_DOSE, label::WATER_DOSE, v.water_dose.as_str()),
            FormField::text(field::COFFEE_WEIGHT, label::COFFEE_WEIGHT, v.coffee_weight.as_str()),
            FormField::text(field::TEMPERATURE, label::TEMPERATURE, v.temperature.as_str()),
            FormField::select(field::GRIND_SIZE, label::GRIND_SIZE, Some(v.grind_size)),
        ]
    }

    fn validate(form: &FormState) -> Result<Self::Values, Vec<ValidationError>> {
        match (
            parse_amount(field::WATER_DOSE, form.raw(field::WATER_DOSE)),
            parse_amount(field::COFFEE_WEIGHT, form.raw(field::COFFEE_WEIGHT)),
            parse_amount(field::TEMPERATURE, form.raw(field::TEMPERATURE)),
            select::<GrindSize>(form, field::GRIND_SIZE),
        ) {
            (Ok(water_dose), Ok(coffee_weight), Ok(temperature), Ok(grind_size)) => {
                Ok(BrewingCustomizationFormValues {
                    water_dose,
                    coffee_weight,
                    temperature,
                    grind_size,
                })
            }
            (water, weight, temperature, grind) => Err([
                water.err(),
                weight.err(),
                temperature.err(),
                grind.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

impl StepForm for RatingStep {
    type Values = BrewingRatingFormValues;

    const STEP: FormStep = FormStep::Rating;
    const SUBMIT_LABEL: &'static str = label::SAVE_BREW;

    fn fields(initial: Option<&Self::Values>) -> Vec<FormField> {
        vec![FormField::select(field::RATING, label::RATING, initial.map(|v| v.rating))]
    }

    fn validate(form: &FormState) -> Result<Self::Values, Vec<ValidationError>> {
        select::<Rating>(form, field::RATING)
            .map(|rating| BrewingRatingFormValues { rating })
            .map_err(|e| vec![e])
    }
}

// ── Field parsers ───────────────────────────────────────────────────

fn required_text(form: &FormState, name: &str) -> Result<String, ValidationError> {
    match form.raw(name) {
        "" => Err(ValidationError::required(name)),
        v => Ok(v.to_string()),
    }
}

fn select<E: FromStr>(form: &FormState, name: &str) -> Result<E, ValidationError> {
    match form.raw(name) {
        "" => Err(ValidationError::required(name)),
        v => v.parse().map_err(|_| ValidationError::not_an_option(name)),
    }
}

/// Check that `raw` is a non-negative finite decimal; returns it trimmed.
pub fn parse_amount(name: &str, raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::required(name));
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(raw.to_string()),
        _ => Err(ValidationError::not_a_number(name)),
    }
}
