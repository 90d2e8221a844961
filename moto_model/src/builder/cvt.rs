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
use crate::builder::stage::BuildConstants;

/// How a CVT roller weight is expected to behave. Advisory only; it has no
/// effect on displacement or power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CvtCharacter {
    Aggressive,
    Balanced,
    Touring
}

impl CvtCharacter {
    pub fn from_roller_weight(roller_weight_g: f64, constants: &BuildConstants) -> CvtCharacter {
        if roller_weight_g < constants.aggressive_roller_below_g {
            CvtCharacter::Aggressive
        } else if roller_weight_g > constants.touring_roller_above_g {
            CvtCharacter::Touring
        } else {
            CvtCharacter::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CvtCharacter::Aggressive => "aggressive/drag",
            CvtCharacter::Balanced => "balanced street",
            CvtCharacter::Touring => "touring/top-speed"
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            CvtCharacter::Aggressive => "Aggressive acceleration. High RPM engagement. Good for drag racing.",
            CvtCharacter::Balanced => "Balanced street setup. Good for daily riding.",
            CvtCharacter::Touring => "Touring setup. Lower RPM cruising. Better top speed potential."
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CvtAdvice {
    pub roller_weight_g: f64,
    pub character: CvtCharacter,
    pub label: &'static str,
    pub advice: &'static str
}

impl CvtAdvice {
    pub fn for_roller_weight(roller_weight_g: f64, constants: &BuildConstants) -> CvtAdvice {
        let character = CvtCharacter::from_roller_weight(roller_weight_g, constants);
        CvtAdvice {
            roller_weight_g,
            character,
            label: character.label(),
            advice: character.advice()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::cvt::{CvtAdvice, CvtCharacter};
    use crate::builder::stage::BuildConstants;

    #[test]
    fn roller_weight_bands() {
        let c = BuildConstants::default();
        assert_eq!(CvtCharacter::from_roller_weight(9.5, &c), CvtCharacter::Aggressive);
        assert_eq!(CvtCharacter::from_roller_weight(10.0, &c), CvtCharacter::Balanced);
        assert_eq!(CvtCharacter::from_roller_weight(14.0, &c), CvtCharacter::Balanced);
        assert_eq!(CvtCharacter::from_roller_weight(14.5, &c), CvtCharacter::Touring);
    }

    #[test]
    fn advice_text() {
        let advice = CvtAdvice::for_roller_weight(7.0, &BuildConstants::default());
        assert_eq!(advice.label, "aggressive/drag");
        assert!(advice.advice.contains("drag racing"));
    }
}
