/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of moto-lab.
 *
 * moto-lab is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * moto-lab is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with moto-lab. If not, see <https://www.gnu.org/licenses/>.
 */

//! Command line front end. Parses arguments, drives the model and hands the
//! results to [`render`] or serde_json for output.

mod render;

use std::error::Error;
use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use moto_model::builder::{block_options, BuildUpdate, cam_options, EngineBuild};
use moto_model::catalog::{Motorcycle, ReferenceData};
use moto_model::compare::{Comparison, resolve_pair};
use moto_model::explorer::{brand_options, CatalogFilter, CatalogStats, class_options, filter_catalog, selected_or_default, Selection};
use moto_model::gearing::{GearingCalculator, GearingConfiguration, TyreSize};
use moto_model::performance::PerformanceEstimate;
use utils::numeric::round1;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "moto-lab", version, about = "Small displacement motorcycle explorer and engine build estimator")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Catalog JSON file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog models matching a filter
    List(FilterArgs),

    /// Aggregate statistics for the models matching a filter
    Stats(FilterArgs),

    /// Show a single model with its estimated figures
    Show(ShowArgs),

    /// Compare two models head to head
    Compare(CompareArgs),

    /// Estimate the output of an engine build
    Build(BuildArgs),

    /// Per gear speed curve and top speeds
    Gearing(GearingArgs),

    /// Print the active settings
    Settings(SettingsArgs)
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Case-insensitive search over model, brand, platform and notes
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Brand to show, or "All"
    #[arg(long, short = 'b', default_value = "All")]
    pub brand: String,

    /// Class to show, or "All"
    #[arg(long, short = 'c', default_value = "All")]
    pub class: String,

    /// Largest displacement to include (defaults to the configured value)
    #[arg(long, value_name = "CC")]
    pub max_cc: Option<u32>,

    /// Model to highlight in the listing
    #[arg(long, short = 's')]
    pub selected: Option<String>
}

impl FilterArgs {
    fn to_filter(&self, settings: &Settings) -> CatalogFilter {
        CatalogFilter {
            query: self.query.clone(),
            brand: Selection::from(self.brand.as_str()),
            class: Selection::from(self.class.as_str()),
            max_cc: self.max_cc.unwrap_or(settings.default_max_cc())
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub id: String
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First model, defaults to the first catalog entry
    pub a: Option<String>,

    /// Second model, defaults to the second catalog entry
    pub b: Option<String>
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Base platform key
    #[arg(long, short = 'p')]
    pub platform: Option<String>,

    /// Block kit part id, or "stock"
    #[arg(long)]
    pub block: Option<String>,

    /// Bore in mm, overrides the block kit
    #[arg(long)]
    pub bore: Option<f64>,

    /// Stroke in mm
    #[arg(long)]
    pub stroke: Option<f64>,

    /// Camshaft part id, or "stock"
    #[arg(long)]
    pub cam: Option<String>,

    /// CVT roller weight in grams (scooters only)
    #[arg(long, value_name = "GRAMS")]
    pub rollers: Option<f64>,

    /// List the platforms and parts available to the builder
    #[arg(long)]
    pub list_parts: bool
}

impl BuildArgs {
    fn updates(&self) -> Vec<BuildUpdate> {
        let mut updates = Vec::new();
        if let Some(block) = &self.block {
            updates.push(BuildUpdate::BlockSelected(block.clone()));
        }
        if let Some(bore) = self.bore {
            updates.push(BuildUpdate::BoreEdited(bore));
        }
        if let Some(stroke) = self.stroke {
            updates.push(BuildUpdate::StrokeEdited(stroke));
        }
        if let Some(cam) = &self.cam {
            updates.push(BuildUpdate::CamSelected(cam.clone()));
        }
        if let Some(rollers) = self.rollers {
            updates.push(BuildUpdate::RollerWeightEdited(rollers));
        }
        updates
    }
}

#[derive(Args, Debug)]
pub struct GearingArgs {
    /// Front sprocket teeth
    #[arg(long, default_value_t = 14)]
    pub front: u32,

    /// Rear sprocket teeth
    #[arg(long, default_value_t = 42)]
    pub rear: u32,

    /// Primary reduction ratio
    #[arg(long, default_value_t = 3.0)]
    pub primary: f64,

    /// Comma separated gear ratios, first gear first
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        "2.5".to_string(), "1.8".to_string(), "1.4".to_string(),
        "1.1".to_string(), "0.9".to_string(), "0.8".to_string()
    ])]
    pub gears: Vec<String>,

    /// Tyre section width in mm
    #[arg(long, default_value_t = 110.0)]
    pub width: f64,

    /// Tyre aspect ratio in percent
    #[arg(long, default_value_t = 70.0)]
    pub aspect: f64,

    /// Rim diameter in inches
    #[arg(long, default_value_t = 17.0)]
    pub rim: f64,

    /// Rpm ceiling (defaults to the configured value)
    #[arg(long)]
    pub rpm_limit: Option<u32>,

    /// Rpm step between plot samples
    #[arg(long)]
    pub step: Option<u32>
}

impl GearingArgs {
    fn to_config(&self, settings: &Settings) -> GearingConfiguration {
        let mut config = GearingConfiguration {
            front_sprocket: self.front,
            rear_sprocket: self.rear,
            primary_ratio: self.primary,
            gear_ratios: Vec::new(),
            tyre: TyreSize { width_mm: self.width, aspect_pct: self.aspect, rim_in: self.rim },
            rpm_limit: self.rpm_limit.unwrap_or(settings.default_rpm_limit())
        };
        config.set_gear_inputs(&self.gears);
        config
    }
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Save the active settings to moto-lab-conf.toml in the working directory
    #[arg(long)]
    pub write: bool
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    bike: &'a Motorcycle,
    estimate: PerformanceEstimate
}

#[derive(Serialize)]
struct ModelDetails<'a> {
    #[serde(flatten)]
    bike: &'a Motorcycle,
    estimate: PerformanceEstimate,
    agility: f64,
    stock_bore_mm: Option<f64>,
    stock_stroke_mm: Option<f64>,
    calculated_cc: Option<f64>
}

#[derive(Serialize)]
struct GearingReport {
    final_drive: f64,
    tyre_circumference_m: f64,
    top_speeds_kmh: Vec<f64>,
    theoretical_top_speed_kmh: f64,
    curve: Vec<moto_model::gearing::SpeedSample>
}

pub fn run(cli: Cli, settings: &Settings, reference: &ReferenceData) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::List(args) => list(&args, cli.json, settings, reference),
        Commands::Stats(args) => stats(&args, cli.json, settings, reference),
        Commands::Show(args) => show(&args, cli.json, reference),
        Commands::Compare(args) => compare(&args, cli.json, reference),
        Commands::Build(args) => build(&args, cli.json, settings, reference),
        Commands::Gearing(args) => gearing(&args, cli.json, settings),
        Commands::Settings(args) => show_settings(&args, settings)
    }
}

fn list(args: &FilterArgs, json: bool, settings: &Settings, reference: &ReferenceData) -> Result<(), Box<dyn Error>> {
    let filter = args.to_filter(settings);
    let filtered = filter_catalog(reference.motorcycles(), &filter);
    info!("{} of {} models match {:?}", filtered.len(), reference.motorcycles().len(), filter);
    if json {
        let entries: Vec<ListEntry> = filtered.iter()
            .map(|bike| ListEntry { bike, estimate: PerformanceEstimate::for_motorcycle(bike) })
            .collect();
        return print_json(&entries);
    }
    let selected = selected_or_default(args.selected.as_deref(), &filtered, reference.motorcycles());
    print!("{}", render::model_table(&filtered, selected.map(|bike| bike.id.as_str())));
    Ok(())
}

fn stats(args: &FilterArgs, json: bool, settings: &Settings, reference: &ReferenceData) -> Result<(), Box<dyn Error>> {
    let filtered = filter_catalog(reference.motorcycles(), &args.to_filter(settings));
    let stats = CatalogStats::from_filtered(&filtered);
    if json {
        return print_json(&stats);
    }
    print!("{}", render::stats(&stats,
                               &brand_options(reference.motorcycles()),
                               &class_options(reference.motorcycles())));
    Ok(())
}

/// The model with `id`, or the first catalog entry when there is no such model
fn resolve_model<'a>(reference: &'a ReferenceData, id: &str) -> &'a Motorcycle {
    if reference.motorcycle(id).is_none() {
        warn!("No motorcycle with id '{}', showing '{}'", id, reference.first_motorcycle().id);
    }
    reference.motorcycle_or(id, 0)
}

fn show(args: &ShowArgs, json: bool, reference: &ReferenceData) -> Result<(), Box<dyn Error>> {
    let bike = resolve_model(reference, &args.id);
    let estimate = PerformanceEstimate::for_motorcycle(bike);
    let geometry = reference.stock_geometry(&bike.id);
    let details = ModelDetails {
        bike,
        estimate,
        agility: estimate.agility(),
        stock_bore_mm: geometry.map(|g| g.bore),
        stock_stroke_mm: geometry.map(|g| g.stroke),
        calculated_cc: reference.stock_displacement(&bike.id).map(round1)
    };
    if json {
        return print_json(&details);
    }
    print!("{}", render::model_details(details.bike, &details.estimate, geometry, details.calculated_cc));
    Ok(())
}

fn compare(args: &CompareArgs, json: bool, reference: &ReferenceData) -> Result<(), Box<dyn Error>> {
    let (a, b) = resolve_pair(reference,
                              args.a.as_deref().unwrap_or_default(),
                              args.b.as_deref().unwrap_or_default());
    let comparison = Comparison::between(a, b);
    if json {
        #[derive(Serialize)]
        struct Output<'a> {
            #[serde(flatten)]
            comparison: &'a Comparison,
            rows: Vec<moto_model::compare::ComparisonRow>,
            radar: Vec<moto_model::compare::RadarPoint>
        }
        return print_json(&Output { comparison: &comparison, rows: comparison.rows(), radar: comparison.radar() });
    }
    print!("{}", render::comparison(&comparison));
    Ok(())
}

fn build(args: &BuildArgs, json: bool, settings: &Settings, reference: &ReferenceData) -> Result<(), Box<dyn Error>> {
    let platform_key = args.platform.clone().unwrap_or_else(|| reference.default_platform().0.to_string());
    let mut engine_build = EngineBuild::new(reference, &platform_key);
    if args.list_parts {
        let blocks = block_options(reference, engine_build.platform());
        let cams = cam_options(reference);
        if json {
            #[derive(Serialize)]
            struct Output<'a> {
                platforms: Vec<&'a str>,
                blocks: Vec<moto_model::builder::BlockOption>,
                cams: Vec<moto_model::builder::CamOption>
            }
            let platforms = reference.platforms().map(|(key, _)| key).collect();
            return print_json(&Output { platforms, blocks, cams });
        }
        print!("{}", render::build_parts(reference, &blocks, &cams));
        return Ok(());
    }
    for update in args.updates() {
        engine_build.handle_update(update, reference);
    }
    let summary = engine_build.summary(settings.build_constants());
    if json {
        return print_json(&summary);
    }
    print!("{}", render::build_summary(&summary));
    Ok(())
}

fn gearing(args: &GearingArgs, json: bool, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let config = args.to_config(settings);
    let calculator = GearingCalculator::from_config(&config)?;
    let report = GearingReport {
        final_drive: calculator.final_drive(),
        tyre_circumference_m: calculator.tyre_circumference_m(),
        top_speeds_kmh: calculator.top_speeds(),
        theoretical_top_speed_kmh: calculator.theoretical_top_speed(),
        curve: calculator.calculate_speed_plot(args.step)
    };
    if json {
        return print_json(&report);
    }
    print!("{}", render::gearing(&report.curve, &report.top_speeds_kmh, report.final_drive,
                                 report.tyre_circumference_m, report.theoretical_top_speed_kmh));
    Ok(())
}

fn show_settings(args: &SettingsArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    print!("{}", settings.to_toml()?);
    if args.write {
        let path = settings.write()?;
        info!("Settings written to {}", path.display());
        println!("Settings written to {}", path.display());
    }
    Ok(())
}
