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


use std::fmt::Write;
use moto_model::builder::{BlockOption, BuildSummary, CamOption};
use moto_model::catalog::{Motorcycle, ReferenceData, StockBoreStroke};
use moto_model::compare::Comparison;
use moto_model::explorer::{CatalogStats, estimated_hp_by_id};
use moto_model::gearing::SpeedSample;
use moto_model::performance::PerformanceEstimate;

pub fn model_table(bikes: &[&Motorcycle], selected_id: Option<&str>) -> String {
    let mut out = String::new();
    let hp = estimated_hp_by_id(bikes);
    let _ = writeln!(out, "  {:<28} {:<16} {:>5} {:<15} {:>7}  {}", "ID", "CLASS", "CC", "COOLING", "EST HP", "MODEL");
    for bike in bikes {
        let marker = if Some(bike.id.as_str()) == selected_id { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:<28} {:<16} {:>5} {:<15} {:>7}  {}",
                         marker,
                         bike.id,
                         bike.class,
                         bike.cc,
                         bike.cooling.as_str(),
                         hp.get(bike.id.as_str()).copied().unwrap_or_default(),
                         bike.display_name());
    }
    let _ = writeln!(out, "{} models", bikes.len());
    out
}

pub fn stats(stats: &CatalogStats, brands: &[String], classes: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Models:          {}", stats.count);
    let _ = writeln!(out, "Average cc:      {}", stats.average_cc);
    let _ = writeln!(out, "Average est. hp: {}", stats.average_power_hp);
    let _ = writeln!(out, "By brand:");
    for (brand, count) in &stats.by_brand {
        let _ = writeln!(out, "  {:<12} {}", brand, count);
    }
    let _ = writeln!(out, "Brands:  {}", brands.join(", "));
    let _ = writeln!(out, "Classes: {}", classes.join(", "));
    out
}

pub fn model_details(bike: &Motorcycle,
                     estimate: &PerformanceEstimate,
                     geometry: Option<&StockBoreStroke>,
                     calculated_cc: Option<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", bike.display_name(), bike.status);
    let _ = writeln!(out, "  Class:        {}", bike.class);
    let _ = writeln!(out, "  Displacement: {}cc", bike.cc);
    let _ = writeln!(out, "  Cooling:      {}", bike.cooling);
    let _ = writeln!(out, "  Transmission: {}", bike.transmission);
    let _ = writeln!(out, "  Platform:     {}", bike.platform);
    if let (Some(geometry), Some(cc)) = (geometry, calculated_cc) {
        let _ = writeln!(out, "  Bore/stroke:  {} x {} mm ({}cc calculated)", geometry.bore, geometry.stroke, cc);
    }
    let _ = writeln!(out, "  Est. power:   {} hp", estimate.power_hp);
    let _ = writeln!(out, "  Est. torque:  {} Nm", estimate.torque_nm);
    let _ = writeln!(out, "  Est. weight:  {} kg", estimate.weight_kg);
    if !bike.notes.is_empty() {
        let _ = writeln!(out, "  {}", bike.notes);
    }
    out
}

pub fn comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<24} {:<24}", "METRIC", comparison.a.name, comparison.b.name);
    for row in comparison.rows() {
        let _ = writeln!(out, "{:<14} {:<24} {:<24}", row.metric, row.a, row.b);
    }
    let _ = writeln!(out);
    for point in comparison.radar() {
        let _ = writeln!(out, "{:<14} {:<24} {:<24}", point.metric, point.a, point.b);
    }
    out
}

pub fn build_parts(reference: &ReferenceData, blocks: &[BlockOption], cams: &[CamOption]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Platforms:");
    for (key, platform) in reference.platforms() {
        let _ = writeln!(out, "  {:<20} {} ({} x {} mm)", key, platform.name, platform.stock_bore, platform.stock_stroke);
    }
    let _ = writeln!(out, "Blocks:");
    for block in blocks {
        let _ = writeln!(out, "  {:<20} {:<16} +{}% bore area  {}", block.id, block.label, block.area_gain_pct, block.price_range);
    }
    let _ = writeln!(out, "Cams:");
    for cam in cams {
        let _ = writeln!(out, "  {:<20} {:<24} {:<10} {}", cam.id, cam.label, cam.character, cam.price_range);
    }
    out
}

pub fn build_summary(summary: &BuildSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary.platform_name);
    let _ = writeln!(out, "  Bore x stroke: {} x {} mm ({})", summary.bore_mm, summary.stroke_mm, summary.bore_origin.id());
    if let Some(stroker) = summary.stroker_mm {
        let _ = writeln!(out, "  Stroker:       +{} mm", stroker);
    }
    let _ = writeln!(out, "  Displacement:  {}cc (stock {}cc, +{}%)",
                     summary.displacement_cc, summary.stock_displacement_cc, summary.percent_gain);
    let _ = writeln!(out, "  Power:         {:.1} hp ({} tier {} + cam {})",
                     summary.power_hp, summary.tier, summary.base_power_hp, summary.cam_bonus_hp);
    let _ = writeln!(out, "  Stage {}: {}", summary.stage, summary.stage_title);
    let _ = writeln!(out, "  {}", summary.recommendation);
    if let Some(cvt) = &summary.cvt {
        let _ = writeln!(out, "  CVT ({}g, {}): {}", cvt.roller_weight_g, cvt.label, cvt.advice);
    }
    out
}

pub fn gearing(curve: &[SpeedSample],
               top_speeds: &[f64],
               final_drive: f64,
               circumference_m: f64,
               theoretical_top_speed: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Final drive {:.2}, tyre circumference {:.3} m", final_drive, circumference_m);
    let _ = write!(out, "{:>6}", "RPM");
    for gear in 1..=top_speeds.len() {
        let _ = write!(out, " {:>7}", format!("G{}", gear));
    }
    let _ = writeln!(out);
    for sample in curve {
        let _ = write!(out, "{:>6}", sample.rpm);
        for speed in &sample.speeds_kmh {
            let _ = write!(out, " {:>7}", speed);
        }
        let _ = writeln!(out);
    }
    let _ = write!(out, "{:>6}", "TOP");
    for speed in top_speeds {
        let _ = write!(out, " {:>7}", speed);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Theoretical top speed: {} km/h", theoretical_top_speed);
    out
}

#[cfg(test)]
mod tests {
    use moto_model::compare::Comparison;
    use crate::cli::render;
    use crate::data::load_reference_data;

    #[test]
    fn table_marks_selection() {
        let reference = load_reference_data(None).unwrap();
        let bikes: Vec<_> = reference.motorcycles().iter().take(2).collect();
        let table = render::model_table(&bikes, Some("honda-click-160"));
        assert!(table.lines().any(|line| line.starts_with("> honda-click-160")));
        assert!(table.ends_with("2 models\n"));
    }

    #[test]
    fn comparison_has_all_rows() {
        let reference = load_reference_data(None).unwrap();
        let (a, b) = moto_model::compare::resolve_pair(&reference, "", "");
        let text = render::comparison(&Comparison::between(a, b));
        for metric in ["Displacement", "Est. Power", "Transmission", "Agility"] {
            assert!(text.contains(metric));
        }
    }
}
