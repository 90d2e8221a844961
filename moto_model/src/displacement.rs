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

use std::f64::consts::PI;
use utils::numeric::round1;
use utils::units::mm3_to_cc;

/// Swept volume in cc for the given bore and stroke (mm), unrounded.
///
/// No bounds are enforced; zero or negative dimensions simply produce a
/// zero or negative volume.
pub fn raw_displacement(bore_mm: f64, stroke_mm: f64, cylinders: u32) -> f64 {
    mm3_to_cc((PI / 4.0) * bore_mm * bore_mm * stroke_mm * cylinders as f64)
}

/// Swept volume in cc rounded to one decimal place
pub fn displacement(bore_mm: f64, stroke_mm: f64, cylinders: u32) -> f64 {
    round1(raw_displacement(bore_mm, stroke_mm, cylinders))
}

/// Displacement of a single cylinder build
pub fn build_displacement(bore_mm: f64, stroke_mm: f64) -> f64 {
    displacement(bore_mm, stroke_mm, 1)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::displacement::{build_displacement, displacement, raw_displacement};

    #[test]
    fn single_cylinder() {
        assert_eq!(displacement(52.4, 57.9, 1), 124.9);
        assert_abs_diff_eq!(displacement(52.4, 57.9, 1), 124.8, epsilon = 0.11);
        assert_eq!(displacement(60.0, 55.5, 1), 156.9);
        assert_eq!(build_displacement(62.0, 48.8), 147.3);
    }

    #[test]
    fn multiple_cylinders_scale_linearly() {
        let one = raw_displacement(58.0, 58.7, 1);
        let two = raw_displacement(58.0, 58.7, 2);
        assert_abs_diff_eq!(two, one * 2.0, epsilon = 1e-9);
        assert_eq!(displacement(58.0, 58.7, 2), 310.2);
    }

    #[test]
    fn non_physical_inputs_pass_through() {
        assert_eq!(displacement(0.0, 57.9, 1), 0.0);
        assert!(displacement(52.4, -57.9, 1) < 0.0);
        assert_eq!(displacement(52.4, 57.9, 0), 0.0);
    }
}
