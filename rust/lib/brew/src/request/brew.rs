//! Brewing flow requests.

/// Start a new brew ("Add new brew").
#[derive(Debug, Clone)]
pub struct AddNewBrewReq;

impl AddNewBrewReq {
    pub const PATH: &'static str = "brew/add";
}

/// Set a raw value on the open form.
#[derive(Debug, Clone)]
pub struct UpdateFieldReq {
    pub field: String,
    pub value: String,
}

impl UpdateFieldReq {
    pub const PATH: &'static str = "brew/form/update-field";

    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Submit the basics step ("Customize brew").
#[derive(Debug, Clone)]
pub struct SubmitBasicsReq;

impl SubmitBasicsReq {
    pub const PATH: &'static str = "brew/basics/submit";
}

/// Submit the customization step ("Rate").
#[derive(Debug, Clone)]
pub struct SubmitCustomizationReq;

impl SubmitCustomizationReq {
    pub const PATH: &'static str = "brew/customization/submit";
}

/// Submit the rating step and create the brew ("Save brew").
#[derive(Debug, Clone)]
pub struct SaveBrewReq;

impl SaveBrewReq {
    pub const PATH: &'static str = "brew/save";
}
