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

//! Rule of thumb power, torque and curb weight figures for catalog models.
//!
//! These are heuristics derived from displacement, cooling and the free text
//! class label. They aren't physical models and never fail; a label that
//! matches nothing falls through to the default branch of each rule.

use serde::Serialize;
use utils::numeric::{round0, round1};
use crate::catalog::{Cooling, Motorcycle};

const TORQUE_PER_HP: f64 = 0.94;
const WEIGHT_REFERENCE_CC: f64 = 110.0;
const WEIGHT_KG_PER_CC: f64 = 0.18;
const AGILITY_REFERENCE_KG: f64 = 220.0;

impl Cooling {
    /// Base specific output (hp per cc)
    pub fn specific_output(&self) -> f64 {
        match self {
            Cooling::Liquid => 0.100,
            Cooling::AirOil => 0.095,
            Cooling::Air | Cooling::ModelSpecific | Cooling::Unknown => 0.088
        }
    }
}

/// Adjustments to specific output keyed off the class label.
///
/// Both checks are independent, a label can carry both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassTraits {
    pub sport: bool,
    pub scooter: bool
}

impl ClassTraits {
    pub fn from_class_label(label: &str) -> ClassTraits {
        let lower = label.to_lowercase();
        ClassTraits {
            sport: lower.contains("sport"),
            scooter: lower.contains("scooter")
        }
    }

    pub fn output_adjustment(&self) -> f64 {
        let mut adjustment = 0.0;
        if self.sport {
            adjustment += 0.012;
        }
        if self.scooter {
            adjustment -= 0.004;
        }
        adjustment
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WeightClass {
    Scooter,
    Underbone,
    Sport,
    DualSport,
    Standard
}

impl WeightClass {
    /// First match wins: scooter, underbone/moped, sport, dual, anything else
    pub fn from_class_label(label: &str) -> WeightClass {
        let lower = label.to_lowercase();
        if lower.contains("scooter") {
            WeightClass::Scooter
        } else if lower.contains("underbone") || lower.contains("moped") {
            WeightClass::Underbone
        } else if lower.contains("sport") {
            WeightClass::Sport
        } else if lower.contains("dual") {
            WeightClass::DualSport
        } else {
            WeightClass::Standard
        }
    }

    pub fn base_weight_kg(&self) -> f64 {
        match self {
            WeightClass::Scooter => 115.0,
            WeightClass::Underbone => 108.0,
            WeightClass::Sport => 132.0,
            WeightClass::DualSport => 125.0,
            WeightClass::Standard => 120.0
        }
    }
}

pub fn estimate_power_hp(cc: f64, cooling: Cooling, class_label: &str) -> f64 {
    let factor = cooling.specific_output() + ClassTraits::from_class_label(class_label).output_adjustment();
    round1(cc * factor)
}

/// Torque tracks power directly
pub fn estimate_torque_nm(power_hp: f64) -> f64 {
    round1(power_hp * TORQUE_PER_HP)
}

/// No clamping; very small or very large displacements give implausible weights
pub fn estimate_weight_kg(cc: f64, class_label: &str) -> f64 {
    let base = WeightClass::from_class_label(class_label).base_weight_kg();
    round0(base + (cc - WEIGHT_REFERENCE_CC) * WEIGHT_KG_PER_CC)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PerformanceEstimate {
    pub power_hp: f64,
    pub torque_nm: f64,
    pub weight_kg: f64
}

impl PerformanceEstimate {
    pub fn for_motorcycle(bike: &Motorcycle) -> PerformanceEstimate {
        let cc = bike.cc as f64;
        let power_hp = estimate_power_hp(cc, bike.cooling, &bike.class);
        PerformanceEstimate {
            power_hp,
            torque_nm: estimate_torque_nm(power_hp),
            weight_kg: estimate_weight_kg(cc, &bike.class)
        }
    }

    /// Lighter bikes score higher
    pub fn agility(&self) -> f64 {
        round0(AGILITY_REFERENCE_KG - self.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Cooling;
    use crate::catalog::test_data::bike;
    use crate::performance::{ClassTraits, estimate_power_hp, estimate_torque_nm, estimate_weight_kg, PerformanceEstimate, WeightClass};

    #[test]
    fn power_by_cooling_and_class() {
        assert_eq!(estimate_power_hp(125.0, Cooling::Liquid, "Scooter"), 12.0);
        assert_eq!(estimate_power_hp(155.0, Cooling::Liquid, "Sport"), 17.4);
        assert_eq!(estimate_power_hp(110.0, Cooling::Air, "Underbone"), 9.7);
        assert_eq!(estimate_power_hp(110.0, Cooling::ModelSpecific, "Underbone"), 9.7);
        assert_eq!(estimate_power_hp(110.0, Cooling::Unknown, ""), 9.7);
        assert_eq!(estimate_power_hp(200.0, Cooling::AirOil, "Naked"), 19.0);
    }

    #[test]
    fn class_adjustments_stack() {
        let traits = ClassTraits::from_class_label("Sport Scooter");
        assert!(traits.sport && traits.scooter);
        assert_eq!(estimate_power_hp(100.0, Cooling::Liquid, "Sport Scooter"), 10.8);
        assert_eq!(estimate_power_hp(100.0, Cooling::Liquid, "SPORT"), 11.2);
    }

    #[test]
    fn torque_follows_power() {
        assert_eq!(estimate_torque_nm(12.0), 11.3);
        assert_eq!(estimate_torque_nm(0.0), 0.0);
    }

    #[test]
    fn weight_by_class() {
        assert_eq!(estimate_weight_kg(150.0, "Sport"), 139.0);
        assert_eq!(estimate_weight_kg(110.0, "Scooter"), 115.0);
        assert_eq!(estimate_weight_kg(110.0, "Moped"), 108.0);
        assert_eq!(estimate_weight_kg(110.0, "Dual Purpose"), 125.0);
        assert_eq!(estimate_weight_kg(110.0, "Dual-sport"), 132.0);
        assert_eq!(estimate_weight_kg(110.0, "Naked"), 120.0);
        assert_eq!(estimate_weight_kg(0.0, "Underbone"), 88.0);
    }

    #[test]
    fn weight_class_priority() {
        assert_eq!(WeightClass::from_class_label("Sport Scooter"), WeightClass::Scooter);
        assert_eq!(WeightClass::from_class_label("Sport Underbone"), WeightClass::Underbone);
        assert_eq!(WeightClass::from_class_label("Dual Sport"), WeightClass::Sport);
    }

    #[test]
    fn estimate_for_catalog_entry() {
        let estimate = PerformanceEstimate::for_motorcycle(&bike("click", "Honda", "Scooter", 125, Cooling::Liquid));
        assert_eq!(estimate.power_hp, 12.0);
        assert_eq!(estimate.torque_nm, 11.3);
        assert_eq!(estimate.weight_kg, 118.0);
        assert_eq!(estimate.agility(), 102.0);
    }
}
