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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Round to a single decimal place; the precision most derived figures are shown at
pub fn round1(float: f64) -> f64 {
    round_float_to(float, 1)
}

/// Round to the nearest whole number
pub fn round0(float: f64) -> f64 {
    float.round()
}

/// Coerce free text from a numeric input into a number.
///
/// Anything that doesn't parse to a finite value becomes `0.0`; no other
/// validation is applied.
pub fn coerce_number(val: &str) -> f64 {
    match val.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0
    }
}

/// Percentage change from `base` to `new`, or `None` when there is no base to compare against
pub fn percent_change(base: f64, new: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    Some((new - base) / base * 100.0)
}

#[cfg(test)]
mod tests {
    use crate::numeric::{coerce_number, percent_change, round0, round1, round_float_to};

    #[test]
    fn round_to_places_tests() {
        assert_eq!(round_float_to(124.8175, 1), 124.8);
        assert_eq!(round_float_to(124.8175, 2), 124.82);
        assert_eq!(round_float_to(124.8175, 0), 125.0);
        assert_eq!(round1(11.28), 11.3);
        assert_eq!(round1(-0.04), -0.0);
        assert_eq!(round0(139.2), 139.0);
        assert_eq!(round0(139.5), 140.0);
    }

    #[test]
    fn coerce_number_tests() {
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number(" 14 "), 14.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-3"), -3.0);
    }

    #[test]
    fn percent_change_tests() {
        assert_eq!(percent_change(0.0, 10.0), None);
        assert_eq!(percent_change(100.0, 125.0), Some(25.0));
        assert_eq!(percent_change(50.0, 40.0), Some(-20.0));
    }
}
