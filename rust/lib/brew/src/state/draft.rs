//! Draft state — stored at `brew/draft` while a brew is being added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::CreateBrewData;
use crate::error::ValidationError;
use crate::form::{
    field, parse_amount, BrewingBasicsFormValues, BrewingCustomizationFormValues,
};
use crate::options::{BrewingProcess, BrewingTechnique, GrindSize, Rating};

/// The brew under construction. Owned by the flow handlers; renderers
/// only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewDraft {
    pub origin: Option<String>,
    pub roaster: Option<String>,
    pub technique: Option<BrewingTechnique>,
    pub process: Option<BrewingProcess>,
    pub water_dose: String,
    pub coffee_weight: String,
    pub temperature: String,
    pub grind_size: GrindSize,
    pub rating: Option<Rating>,
    created_at: Option<DateTime<Utc>>,
}

impl BrewDraft {
    pub const PATH: &'static str = "brew/draft";

    /// An empty draft carrying the customization defaults.
    pub fn new() -> Self {
        let defaults = BrewingCustomizationFormValues::default();
        Self {
            origin: None,
            roaster: None,
            technique: None,
            process: None,
            water_dose: defaults.water_dose,
            coffee_weight: defaults.coffee_weight,
            temperature: defaults.temperature,
            grind_size: defaults.grind_size,
            rating: None,
            created_at: None,
        }
    }

    pub fn apply_basics(&mut self, values: BrewingBasicsFormValues) {
        self.origin = Some(values.origin);
        self.roaster = Some(values.roaster);
        self.technique = Some(values.technique);
        self.process = Some(values.process);
    }

    pub fn apply_customization(&mut self, values: BrewingCustomizationFormValues) {
        self.water_dose = values.water_dose;
        self.coffee_weight = values.coffee_weight;
        self.temperature = values.temperature;
        self.grind_size = values.grind_size;
    }

    /// Current customization values, used to pre-fill that step.
    pub fn customization(&self) -> BrewingCustomizationFormValues {
        BrewingCustomizationFormValues {
            water_dose: self.water_dose.clone(),
            coffee_weight: self.coffee_weight.clone(),
            temperature: self.temperature.clone(),
            grind_size: self.grind_size,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Assign the creation timestamp if it has not been assigned yet.
    ///
    /// Returns the timestamp the draft carries afterwards, so a retried
    /// submission reuses the first one.
    pub fn stamp(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        *self.created_at.get_or_insert(now)
    }

    /// Build the API payload; every field must be set and valid.
    pub fn finalize(&self) -> Result<CreateBrewData, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let origin = present(&self.origin, field::ORIGIN, &mut errors);
        let roaster = present(&self.roaster, field::ROASTER, &mut errors);
        let technique = present(&self.technique, field::TECHNIQUE, &mut errors);
        let process = present(&self.process, field::PROCESS, &mut errors);
        let rating = present(&self.rating, field::RATING, &mut errors);
        let created_at = present(&self.created_at, "createdAt", &mut errors);
        for (name, raw) in [
            (field::WATER_DOSE, &self.water_dose),
            (field::COFFEE_WEIGHT, &self.coffee_weight),
            (field::TEMPERATURE, &self.temperature),
        ] {
            if let Err(e) = parse_amount(name, raw) {
                errors.push(e);
            }
        }

        match (origin, roaster, technique, process, rating, created_at) {
            (Some(origin), Some(roaster), Some(technique), Some(process), Some(rating), Some(created_at))
                if errors.is_empty() =>
            {
                Ok(CreateBrewData {
                    origin,
                    roaster,
                    technique,
                    process,
                    water_dose: self.water_dose.trim().to_string(),
                    coffee_weight: self.coffee_weight.trim().to_string(),
                    temperature: self.temperature.trim().to_string(),
                    grind_size: self.grind_size,
                    rating,
                    created_at,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Default for BrewDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn present<T: Clone>(value: &Option<T>, name: &str, errors: &mut Vec<ValidationError>) -> Option<T> {
    if value.is_none() {
        errors.push(ValidationError::required(name));
    }
    value.clone()
}
