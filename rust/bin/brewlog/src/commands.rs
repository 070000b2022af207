//! Command implementations.
//!
//! Each command builds a Flux app from the config, emits requests the way
//! a renderer would, and prints what ends up in state.

use std::any::Any;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use brewlog::form::{field, label, FormState};
use brewlog::options::{labels, BrewingProcess, BrewingTechnique, GrindSize, Rating};
use brewlog::request::*;
use brewlog::state::{BrewFeed, FlowState, FlowStep};
use brewlog::summary::feed_view;
use brewlog::{BrewlogConfig, Flux};

/// Values for `brewlog add`. Customization values left out keep their defaults.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub origin: String,
    #[arg(long)]
    pub roaster: String,
    /// One of `brewlog options` techniques, e.g. "V60".
    #[arg(long)]
    pub technique: String,
    #[arg(long)]
    pub process: String,
    /// Water dose in ml (default 300).
    #[arg(long)]
    pub water: Option<String>,
    /// Coffee weight in g (default 18).
    #[arg(long)]
    pub weight: Option<String>,
    /// Temperature in °C (default 95).
    #[arg(long)]
    pub temperature: Option<String>,
    /// Grind size label (default Medium-Fine).
    #[arg(long)]
    pub grind: Option<String>,
    /// 1 to 5.
    #[arg(long)]
    pub rating: String,
}

/// `brewlog feed`
pub async fn feed(config: &BrewlogConfig, json_output: bool) -> Result<()> {
    let flux = start(config).await?;
    let feed = feed_state(&flux);
    if let Some(err) = &feed.error {
        anyhow::bail!("Failed to load brews: {}", err);
    }
    print_feed(&feed, json_output)
}

/// `brewlog add`
pub async fn add(config: &BrewlogConfig, args: AddArgs, json_output: bool) -> Result<()> {
    let flux = start(config).await?;
    flux.emit(AddNewBrewReq::PATH, AddNewBrewReq).await;

    fill(&flux, &[
        (field::ORIGIN, Some(args.origin)),
        (field::ROASTER, Some(args.roaster)),
        (field::TECHNIQUE, Some(args.technique)),
        (field::PROCESS, Some(args.process)),
    ])
    .await;
    advance(&flux, SubmitBasicsReq::PATH, SubmitBasicsReq, FlowStep::Customization).await?;

    fill(&flux, &[
        (field::WATER_DOSE, args.water),
        (field::COFFEE_WEIGHT, args.weight),
        (field::TEMPERATURE, args.temperature),
        (field::GRIND_SIZE, args.grind),
    ])
    .await;
    advance(&flux, SubmitCustomizationReq::PATH, SubmitCustomizationReq, FlowStep::Rating).await?;

    fill(&flux, &[(field::RATING, Some(args.rating))]).await;
    advance(&flux, SaveBrewReq::PATH, SaveBrewReq, FlowStep::Done)
        .await
        .map_err(|e| e.context("Failed to save brew"))?;

    if !json_output {
        println!("Brew saved.\n");
    }
    print_feed(&feed_state(&flux), json_output)
}

/// `brewlog options`
pub fn options(json_output: bool) -> Result<()> {
    let sets = [
        (label::TECHNIQUE, labels::<BrewingTechnique>()),
        (label::PROCESS, labels::<BrewingProcess>()),
        (label::GRIND_SIZE, labels::<GrindSize>()),
        (label::RATING, labels::<Rating>()),
    ];

    if json_output {
        let map: serde_json::Map<String, serde_json::Value> = sets
            .into_iter()
            .map(|(name, values)| (name.to_string(), values.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (name, values) in sets {
            println!("{:<16} {}", name, values.join(", "));
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────

async fn start(config: &BrewlogConfig) -> Result<Flux> {
    let api = config.api.build()?;
    debug!(backend = ?config.api.backend, "starting");
    let flux = brewlog::app(api, config.flow.clone());
    flux.emit(InitializeReq::PATH, InitializeReq).await;
    Ok(flux)
}

async fn fill(flux: &Flux, values: &[(&str, Option<String>)]) {
    for (name, value) in values {
        if let Some(value) = value {
            flux.emit(UpdateFieldReq::PATH, UpdateFieldReq::new(*name, value.as_str()))
                .await;
        }
    }
}

/// Emit a step request and check the flow reached `next`.
async fn advance<T: Any + Send + Sync>(flux: &Flux, path: &str, req: T, next: FlowStep) -> Result<()> {
    flux.emit(path, req).await;
    let flow = flow_state(flux);
    if flow.step == next {
        return Ok(());
    }

    let form = flux.get_as::<FormState>(FormState::PATH);
    match (form, flow.error) {
        (Some(form), _) if form.has_errors() => {
            let lines: Vec<String> = form
                .errors
                .iter()
                .map(|(name, message)| {
                    let label = form.field(name).map(|f| f.label).unwrap_or(name.as_str());
                    format!("  {}: {}", label, message)
                })
                .collect();
            anyhow::bail!("Invalid input:\n{}", lines.join("\n"))
        }
        (_, Some(error)) => anyhow::bail!("{}", error),
        _ => anyhow::bail!("Brew flow stopped at {:?}", flow.step),
    }
}

fn flow_state(flux: &Flux) -> FlowState {
    flux.get_as::<FlowState>(FlowState::PATH)
        .unwrap_or_else(FlowState::idle)
}

fn feed_state(flux: &Flux) -> BrewFeed {
    flux.get_as::<BrewFeed>(BrewFeed::PATH)
        .unwrap_or_else(BrewFeed::empty)
}

fn print_feed(feed: &BrewFeed, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&feed.brews)?);
        return Ok(());
    }
    if feed.brews.is_empty() {
        println!("No brews yet. {}: `brewlog add`.", label::ADD_NEW_BREW);
        return Ok(());
    }
    for (i, summary) in feed_view(feed).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", summary);
    }
    Ok(())
}
