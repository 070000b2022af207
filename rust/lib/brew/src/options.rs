//! Closed option sets for the brew form selects.
//!
//! Labels are the wire format: they are what renderers show, what the
//! API payload carries, and what `FromStr` accepts.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum BrewingTechnique {
    #[strum(serialize = "V60")]
    #[serde(rename = "V60")]
    V60,
    #[strum(serialize = "Chemex")]
    #[serde(rename = "Chemex")]
    Chemex,
    #[strum(serialize = "AeroPress")]
    #[serde(rename = "AeroPress")]
    AeroPress,
    #[strum(serialize = "French Press")]
    #[serde(rename = "French Press")]
    FrenchPress,
    #[strum(serialize = "Kalita Wave")]
    #[serde(rename = "Kalita Wave")]
    KalitaWave,
    #[strum(serialize = "Moka Pot")]
    #[serde(rename = "Moka Pot")]
    MokaPot,
    #[strum(serialize = "Espresso")]
    #[serde(rename = "Espresso")]
    Espresso,
    #[strum(serialize = "Cold Brew")]
    #[serde(rename = "Cold Brew")]
    ColdBrew,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum BrewingProcess {
    Washed,
    Natural,
    Honey,
    Anaerobic,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum GrindSize {
    #[strum(serialize = "Extra-Fine")]
    #[serde(rename = "Extra-Fine")]
    ExtraFine,
    #[strum(serialize = "Fine")]
    #[serde(rename = "Fine")]
    Fine,
    #[strum(serialize = "Medium-Fine")]
    #[serde(rename = "Medium-Fine")]
    MediumFine,
    #[strum(serialize = "Medium")]
    #[serde(rename = "Medium")]
    Medium,
    #[strum(serialize = "Medium-Coarse")]
    #[serde(rename = "Medium-Coarse")]
    MediumCoarse,
    #[strum(serialize = "Coarse")]
    #[serde(rename = "Coarse")]
    Coarse,
    #[strum(serialize = "Extra-Coarse")]
    #[serde(rename = "Extra-Coarse")]
    ExtraCoarse,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Rating {
    #[strum(serialize = "1")]
    #[serde(rename = "1")]
    One,
    #[strum(serialize = "2")]
    #[serde(rename = "2")]
    Two,
    #[strum(serialize = "3")]
    #[serde(rename = "3")]
    Three,
    #[strum(serialize = "4")]
    #[serde(rename = "4")]
    Four,
    #[strum(serialize = "5")]
    #[serde(rename = "5")]
    Five,
}

/// Option labels in declaration order, for select lists.
pub fn labels<E>() -> Vec<String>
where
    E: IntoEnumIterator + AsRef<str>,
{
    E::iter().map(|e| e.as_ref().to_string()).collect()
}
