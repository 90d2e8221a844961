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

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utils::numeric::{percent_change, round0, round1};
use crate::catalog::{AftermarketPart, PartType};
use crate::error::ParseLabelError;

/// Empirical constants behind the build estimate.
///
/// The defaults are the tuned values; a settings file can override any of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConstants {
    pub stock_multiplier: f64,
    pub street_multiplier: f64,
    pub race_multiplier: f64,
    pub stage_two_threshold_pct: f64,
    pub stage_three_threshold_pct: f64,
    pub touring_cam_bonus_hp: f64,
    pub racing_cam_bonus_hp: f64,
    pub aggressive_roller_below_g: f64,
    pub touring_roller_above_g: f64
}

impl Default for BuildConstants {
    fn default() -> Self {
        BuildConstants {
            stock_multiplier: 0.09,
            street_multiplier: 0.11,
            race_multiplier: 0.14,
            stage_two_threshold_pct: 8.0,
            stage_three_threshold_pct: 25.0,
            touring_cam_bonus_hp: 1.5,
            racing_cam_bonus_hp: 3.2,
            aggressive_roller_below_g: 10.0,
            touring_roller_above_g: 14.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTier {
    Stock,
    Street,
    Race
}

impl BuildTier {
    /// Any bore over stock counts as a street build; `Race` is only used directly
    pub fn for_bore(bore_mm: f64, stock_bore_mm: f64) -> BuildTier {
        if bore_mm > stock_bore_mm {
            BuildTier::Street
        } else {
            BuildTier::Stock
        }
    }

    pub fn multiplier(&self, constants: &BuildConstants) -> f64 {
        match self {
            BuildTier::Stock => constants.stock_multiplier,
            BuildTier::Street => constants.street_multiplier,
            BuildTier::Race => constants.race_multiplier
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTier::Stock => "stock",
            BuildTier::Street => "street",
            BuildTier::Race => "race"
        }
    }
}

impl FromStr for BuildTier {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stock" => Ok(BuildTier::Stock),
            "street" => Ok(BuildTier::Street),
            "race" => Ok(BuildTier::Race),
            _ => Err(ParseLabelError::new("build tier", s))
        }
    }
}

impl Display for BuildTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn estimate_build_power(cc: f64, tier: BuildTier, constants: &BuildConstants) -> f64 {
    round1(cc * tier.multiplier(constants))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CamGrade {
    Stock,
    Touring,
    Racing
}

impl CamGrade {
    /// Grade a camshaft part from its lift descriptor. `None` for parts that aren't
    /// cams and for cams whose lift isn't one of the graded profiles
    pub fn for_part(part: &AftermarketPart) -> Option<CamGrade> {
        if part.part_type != PartType::Cam {
            return None;
        }
        match part.specs.lift.as_deref()?.trim().to_lowercase().as_str() {
            "high" => Some(CamGrade::Racing),
            "low-mid" => Some(CamGrade::Touring),
            _ => None
        }
    }

    /// Flat bonus added on top of the displacement based estimate
    pub fn bonus_hp(&self, constants: &BuildConstants) -> f64 {
        match self {
            CamGrade::Stock => 0.0,
            CamGrade::Touring => constants.touring_cam_bonus_hp,
            CamGrade::Racing => constants.racing_cam_bonus_hp
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CamGrade::Stock => "Standard Lift",
            CamGrade::Touring => "Touring",
            CamGrade::Racing => "Race Spec"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BuildStage {
    One,
    Two,
    Three
}

impl BuildStage {
    pub fn classify(percent_gain: f64, constants: &BuildConstants) -> BuildStage {
        if percent_gain < constants.stage_two_threshold_pct {
            BuildStage::One
        } else if percent_gain < constants.stage_three_threshold_pct {
            BuildStage::Two
        } else {
            BuildStage::Three
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            BuildStage::One => 1,
            BuildStage::Two => 2,
            BuildStage::Three => 3
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuildStage::One => "Stage 1: Bolt-ons (Stock Engine)",
            BuildStage::Two => "Stage 2: Sports / Touring (Bore Up)",
            BuildStage::Three => "Stage 3: Competition / Open (Full Build)"
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            BuildStage::One => "Recommended: Exhaust, Aftermarket ECU/tune, Air filter, CVT tuning.",
            BuildStage::Two => "Recommended: Camshaft upgrade, Injector resizing, Oil cooling support.",
            BuildStage::Three => "Required: Forged internals, Big valves, Porting, High-flow cooling system."
        }
    }
}

/// Whole percent displacement gain over stock; 0 when there is no stock volume to compare with
pub fn percent_gain(new_cc: f64, stock_cc: f64) -> f64 {
    percent_change(stock_cc, new_cc).map(round0).unwrap_or(0.0)
}

/// Whole percent bore increase a block kit gives over the stock bore
pub fn block_area_gain_pct(part_bore_mm: f64, stock_bore_mm: f64) -> f64 {
    percent_change(stock_bore_mm, part_bore_mm).map(round0).unwrap_or(0.0)
}
