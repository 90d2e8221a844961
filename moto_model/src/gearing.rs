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


use serde::{Deserialize, Serialize};
use tracing::warn;
use utils::numeric::{coerce_number, round0, round1};
use utils::units::{inches_to_mm, m_per_min_to_kmh, mm_to_m};
use crate::error::{Error, ErrorKind, Result};

pub const DEFAULT_RPM_STEP: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TyreSize {
    pub width_mm: f64,
    pub aspect_pct: f64,
    pub rim_in: f64
}

impl TyreSize {
    pub fn circumference_m(&self) -> f64 {
        tire_circumference_m(self.width_mm, self.aspect_pct, self.rim_in)
    }
}

impl Default for TyreSize {
    fn default() -> Self {
        TyreSize { width_mm: 110.0, aspect_pct: 70.0, rim_in: 17.0 }
    }
}

/// Raw gearing inputs as entered by the user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearingConfiguration {
    pub front_sprocket: u32,
    pub rear_sprocket: u32,
    pub primary_ratio: f64,
    pub gear_ratios: Vec<f64>,
    pub tyre: TyreSize,
    pub rpm_limit: u32
}

impl Default for GearingConfiguration {
    fn default() -> Self {
        GearingConfiguration {
            front_sprocket: 14,
            rear_sprocket: 42,
            primary_ratio: 3.0,
            gear_ratios: vec![2.5, 1.8, 1.4, 1.1, 0.9, 0.8],
            tyre: TyreSize::default(),
            rpm_limit: 12000
        }
    }
}

impl GearingConfiguration {
    /// Replace the gear ratios with free text values. Anything that isn't a
    /// number becomes a ratio of 0 for that gear
    pub fn set_gear_inputs<S: AsRef<str>>(&mut self, inputs: &[S]) {
        self.gear_ratios = inputs.iter().map(|val| coerce_number(val.as_ref())).collect();
    }
}

pub fn gear_ratio(driving_teeth: f64, driven_teeth: f64) -> f64 {
    if driving_teeth == 0.0 {
        return 0.0;
    }
    driven_teeth / driving_teeth
}

pub fn final_drive(front_sprocket: u32, rear_sprocket: u32) -> Result<f64> {
    if front_sprocket == 0 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "Front sprocket must have at least one tooth".to_string()
        ));
    }
    Ok(gear_ratio(front_sprocket as f64, rear_sprocket as f64))
}

/// Rolling circumference in metres of a tyre given as `width/aspect-rim`
pub fn tire_circumference_m(width_mm: f64, aspect_pct: f64, rim_in: f64) -> f64 {
    let diameter_mm = inches_to_mm(rim_in) + 2.0 * width_mm * aspect_pct / 100.0;
    mm_to_m(diameter_mm * std::f64::consts::PI)
}

/// Road speed in km/h. Returns 0 when any ratio in the chain is 0
pub fn speed_at_rpm(rpm: f64,
                    gear_ratio: f64,
                    primary_ratio: f64,
                    final_drive: f64,
                    circumference_m: f64) -> f64 {
    let total_ratio = primary_ratio * gear_ratio * final_drive;
    if total_ratio == 0.0 {
        return 0.0;
    }
    m_per_min_to_kmh(rpm * circumference_m / total_ratio)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeedSample {
    pub rpm: u32,
    pub speeds_kmh: Vec<f64>
}

pub struct GearingCalculator {
    rpm_limit: u32,
    primary_ratio: f64,
    gear_ratios: Vec<f64>,
    final_drive: f64,
    tyre_circumference_m: f64
}

impl GearingCalculator {
    pub fn from_config(config: &GearingConfiguration) -> Result<GearingCalculator> {
        let final_drive = final_drive(config.front_sprocket, config.rear_sprocket)?;
        if config.gear_ratios.is_empty() {
            warn!("No gear ratios configured, speed plot will be empty");
        }
        Ok(GearingCalculator {
            rpm_limit: config.rpm_limit,
            primary_ratio: config.primary_ratio,
            gear_ratios: config.gear_ratios.clone(),
            final_drive,
            tyre_circumference_m: config.tyre.circumference_m()
        })
    }

    pub fn set_gear_ratios(&mut self, ratios: Vec<f64>) {
        self.gear_ratios = ratios
    }

    pub fn set_final_drive(&mut self, ratio: f64) {
        self.final_drive = ratio
    }

    pub fn max_rpm(&self) -> u32 {
        self.rpm_limit
    }

    pub fn num_gears(&self) -> usize {
        self.gear_ratios.len()
    }

    pub fn gear_ratios(&self) -> &[f64] {
        &self.gear_ratios
    }

    pub fn final_drive(&self) -> f64 {
        self.final_drive
    }

    pub fn tyre_circumference_m(&self) -> f64 {
        self.tyre_circumference_m
    }

    /// Speed (km/h) at `rpm` in the gear at `gear_idx` (indexed from 0)
    pub fn speed_at_rpm(&self, rpm: u32, gear_idx: usize) -> Option<f64> {
        let ratio = self.gear_ratios.get(gear_idx)?;
        Some(speed_at_rpm(rpm as f64, *ratio, self.primary_ratio, self.final_drive, self.tyre_circumference_m))
    }

    fn rpm_points(&self, rpm_increments: Option<u32>) -> impl Iterator<Item=u32> {
        let step = match rpm_increments.unwrap_or(DEFAULT_RPM_STEP) {
            0 => DEFAULT_RPM_STEP,
            step => step
        };
        (0..=self.rpm_limit).step_by(step as usize)
    }

    /// `(rpm, km/h)` pairs for a single gear, empty if the gear doesn't exist
    pub fn calculate_speed_plot_for_gear(&self, gear_idx: usize, rpm_increments: Option<u32>) -> Vec<(u32, f64)> {
        if gear_idx >= self.gear_ratios.len() {
            return Vec::new();
        }
        self.rpm_points(rpm_increments)
            .filter_map(|rpm| Some((rpm, round1(self.speed_at_rpm(rpm, gear_idx)?))))
            .collect()
    }

    /// One sample per rpm step with the speed in every gear
    pub fn calculate_speed_plot(&self, rpm_increments: Option<u32>) -> Vec<SpeedSample> {
        self.rpm_points(rpm_increments)
            .map(|rpm| {
                let speeds_kmh = (0..self.gear_ratios.len())
                    .filter_map(|gear_idx| self.speed_at_rpm(rpm, gear_idx))
                    .map(round1)
                    .collect();
                SpeedSample { rpm, speeds_kmh }
            })
            .collect()
    }

    pub fn max_speed_for_gear(&self, gear_idx: usize) -> Option<f64> {
        self.speed_at_rpm(self.rpm_limit, gear_idx).map(round0)
    }

    pub fn top_speeds(&self) -> Vec<f64> {
        (0..self.gear_ratios.len()).filter_map(|idx| self.max_speed_for_gear(idx)).collect()
    }

    /// Top speed in the highest gear, 0 with no gears
    pub fn theoretical_top_speed(&self) -> f64 {
        match self.gear_ratios.len() {
            0 => 0.0,
            n => self.max_speed_for_gear(n - 1).unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::error::ErrorKind;
    use crate::gearing::{final_drive, gear_ratio, GearingCalculator, GearingConfiguration, speed_at_rpm, tire_circumference_m};

    #[test]
    fn final_drive_ratio() {
        assert_eq!(final_drive(14, 42).unwrap(), 3.0);
        assert_eq!(final_drive(15, 45).unwrap(), 3.0);
        assert_eq!(final_drive(0, 42).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(gear_ratio(0.0, 42.0), 0.0);
    }

    #[test]
    fn tyre_circumference() {
        assert_abs_diff_eq!(tire_circumference_m(110.0, 70.0, 17.0), 1.8403, epsilon = 0.001);
        assert_abs_diff_eq!(tire_circumference_m(0.0, 0.0, 10.0), 0.798, epsilon = 0.001);
    }

    #[test]
    fn zero_ratios_give_zero_speed() {
        assert_eq!(speed_at_rpm(0.0, 2.5, 3.0, 3.0, 1.84), 0.0);
        assert_eq!(speed_at_rpm(9000.0, 0.0, 3.0, 3.0, 1.84), 0.0);
        assert_eq!(speed_at_rpm(9000.0, 2.5, 0.0, 3.0, 1.84), 0.0);
    }

    #[test]
    fn speed_scales_with_rpm() {
        let slow = speed_at_rpm(5000.0, 1.0, 3.0, 3.0, 1.8);
        let fast = speed_at_rpm(10000.0, 1.0, 3.0, 3.0, 1.8);
        assert_abs_diff_eq!(fast, slow * 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slow, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn default_speed_plot() {
        let calculator = GearingCalculator::from_config(&GearingConfiguration::default()).unwrap();
        let plot = calculator.calculate_speed_plot(None);
        assert_eq!(plot.len(), 13);
        assert_eq!(plot[0].rpm, 0);
        assert!(plot[0].speeds_kmh.iter().all(|s| *s == 0.0));
        assert_eq!(plot[12].rpm, 12000);
        assert_eq!(plot[12].speeds_kmh.len(), 6);
        for sample in &plot {
            assert!(sample.speeds_kmh.windows(2).all(|w| w[0] <= w[1]));
        }
        // restartable
        assert_eq!(plot, calculator.calculate_speed_plot(None));
    }

    #[test]
    fn top_speeds() {
        let calculator = GearingCalculator::from_config(&GearingConfiguration::default()).unwrap();
        assert_eq!(calculator.top_speeds(), vec![59.0, 82.0, 105.0, 134.0, 164.0, 184.0]);
        assert_eq!(calculator.theoretical_top_speed(), 184.0);
        assert_eq!(calculator.max_speed_for_gear(6), None);
    }

    #[test]
    fn non_numeric_gear_is_zero() {
        let mut config = GearingConfiguration::default();
        config.set_gear_inputs(&["2.5", "abc", " 1.4 "]);
        let calculator = GearingCalculator::from_config(&config).unwrap();
        assert_eq!(calculator.gear_ratios()[1], 0.0);
        assert_eq!(calculator.max_speed_for_gear(1), Some(0.0));
        assert_eq!(calculator.num_gears(), 3);
    }

    #[test]
    fn plot_step_handling() {
        let mut config = GearingConfiguration::default();
        config.rpm_limit = 2500;
        let calculator = GearingCalculator::from_config(&config).unwrap();
        assert_eq!(calculator.calculate_speed_plot(Some(0)).len(), 3);
        assert_eq!(calculator.calculate_speed_plot_for_gear(0, Some(500)).len(), 6);
        assert!(calculator.calculate_speed_plot_for_gear(9, None).is_empty());
    }

    #[test]
    fn zero_front_sprocket_rejected() {
        let mut config = GearingConfiguration::default();
        config.front_sprocket = 0;
        assert!(GearingCalculator::from_config(&config).is_err());
    }
}
