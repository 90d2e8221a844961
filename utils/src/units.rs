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

pub const MM_PER_INCH: f64 = 25.4;
pub const MM_PER_M: f64 = 1000.0;
pub const M_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_m(mm: f64) -> f64 {
    mm / MM_PER_M
}

/// Convert a distance covered per minute (metres) into km/h
pub fn m_per_min_to_kmh(m_per_min: f64) -> f64 {
    (m_per_min * MINUTES_PER_HOUR) / M_PER_KM
}

pub fn mm3_to_cc(volume_mm3: f64) -> f64 {
    volume_mm3 / 1000.0
}
