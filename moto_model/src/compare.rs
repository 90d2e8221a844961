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


use serde::Serialize;
use crate::catalog::{Motorcycle, ReferenceData};
use crate::performance::PerformanceEstimate;

/// Pick the two models to compare. An unknown `a_id` falls back to the first
/// catalog entry and an unknown `b_id` to the second (or the first if there's only one)
pub fn resolve_pair<'a>(reference: &'a ReferenceData, a_id: &str, b_id: &str) -> (&'a Motorcycle, &'a Motorcycle) {
    (reference.motorcycle_or(a_id, 0), reference.motorcycle_or(b_id, 1))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub cc: u32,
    pub transmission: String,
    pub estimate: PerformanceEstimate
}

impl ModelSummary {
    pub fn for_motorcycle(bike: &Motorcycle) -> ModelSummary {
        ModelSummary {
            id: bike.id.clone(),
            name: bike.display_name(),
            cc: bike.cc,
            transmission: bike.transmission.clone(),
            estimate: PerformanceEstimate::for_motorcycle(bike)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub a: String,
    pub b: String
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarPoint {
    pub metric: &'static str,
    pub a: f64,
    pub b: f64
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub a: ModelSummary,
    pub b: ModelSummary
}

impl Comparison {
    pub fn between(a: &Motorcycle, b: &Motorcycle) -> Comparison {
        Comparison {
            a: ModelSummary::for_motorcycle(a),
            b: ModelSummary::for_motorcycle(b)
        }
    }

    pub fn rows(&self) -> Vec<ComparisonRow> {
        let row = |metric, format: fn(&ModelSummary) -> String| {
            ComparisonRow { metric, a: format(&self.a), b: format(&self.b) }
        };
        vec![
            row("Displacement", |m| format!("{}cc", m.cc)),
            row("Est. Power", |m| format!("{} hp", m.estimate.power_hp)),
            row("Est. Torque", |m| format!("{} Nm", m.estimate.torque_nm)),
            row("Weight", |m| format!("{} kg", m.estimate.weight_kg)),
            row("Transmission", |m| m.transmission.clone()),
        ]
    }

    pub fn radar(&self) -> Vec<RadarPoint> {
        let (a, b) = (&self.a.estimate, &self.b.estimate);
        vec![
            RadarPoint { metric: "Power", a: a.power_hp, b: b.power_hp },
            RadarPoint { metric: "Torque", a: a.torque_nm, b: b.torque_nm },
            RadarPoint { metric: "Displacement", a: self.a.cc as f64, b: self.b.cc as f64 },
            RadarPoint { metric: "Agility", a: a.agility(), b: b.agility() },
        ]
    }
}
