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

//! Catalog filtering and aggregate statistics for the explorer view.

use std::cmp::Ordering;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use utils::numeric::{round0, round1};
use crate::catalog::Motorcycle;
use crate::performance::PerformanceEstimate;

pub const ALL_LABEL: &str = "All";
pub const DEFAULT_MAX_CC: u32 = 200;

/// A brand or class filter value
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String)
}

impl Selection {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Only(value) => value
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        match value {
            ALL_LABEL => Selection::All,
            other => Selection::Only(other.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::from(value.as_str())
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    pub query: String,
    pub brand: Selection,
    pub class: Selection,
    pub max_cc: u32
}

impl Default for CatalogFilter {
    fn default() -> Self {
        CatalogFilter {
            query: String::new(),
            brand: Selection::All,
            class: Selection::All,
            max_cc: DEFAULT_MAX_CC
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, bike: &Motorcycle) -> bool {
        if bike.cc > self.max_cc || !self.brand.matches(&bike.brand) || !self.class.matches(&bike.class) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&bike.model, &bike.brand, &bike.platform, &bike.notes]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Case-insensitive ordering, lowercase before uppercase when the letters are equal
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

fn catalog_order(a: &Motorcycle, b: &Motorcycle) -> Ordering {
    locale_cmp(&a.brand, &b.brand).then(a.cc.cmp(&b.cc))
}

/// Matching motorcycles ordered by brand then displacement, catalog order kept for ties
pub fn filter_catalog<'a, I>(catalog: I, filter: &CatalogFilter) -> Vec<&'a Motorcycle>
    where I: IntoIterator<Item=&'a Motorcycle>
{
    let mut matches: Vec<&Motorcycle> = catalog.into_iter().filter(|bike| filter.matches(bike)).collect();
    matches.sort_by(|a, b| catalog_order(a, b));
    matches
}

pub fn aggregate_by_brand<'a>(bikes: &[&'a Motorcycle]) -> IndexMap<&'a str, usize> {
    let mut counts = IndexMap::new();
    for bike in bikes.iter().copied() {
        *counts.entry(bike.brand.as_str()).or_insert(0) += 1;
    }
    counts
}

pub fn average_cc(bikes: &[&Motorcycle]) -> u32 {
    if bikes.is_empty() {
        return 0;
    }
    round0(bikes.iter().map(|bike| bike.cc as f64).mean()) as u32
}

pub fn average_power_hp(bikes: &[&Motorcycle]) -> f64 {
    if bikes.is_empty() {
        return 0.0;
    }
    round1(bikes.iter().map(|bike| PerformanceEstimate::for_motorcycle(bike).power_hp).mean())
}

fn options<'a>(values: impl Iterator<Item=&'a str>) -> Vec<String> {
    std::iter::once(ALL_LABEL)
        .chain(values.unique())
        .map(str::to_string)
        .collect()
}

/// "All" followed by each brand in catalog order
pub fn brand_options(catalog: &[Motorcycle]) -> Vec<String> {
    options(catalog.iter().map(|bike| bike.brand.as_str()))
}

pub fn class_options(catalog: &[Motorcycle]) -> Vec<String> {
    options(catalog.iter().map(|bike| bike.class.as_str()))
}

pub fn estimated_hp_by_id<'a>(bikes: &[&'a Motorcycle]) -> IndexMap<&'a str, f64> {
    bikes.iter()
        .copied()
        .map(|bike| (bike.id.as_str(), PerformanceEstimate::for_motorcycle(bike).power_hp))
        .collect()
}

/// The explicitly selected model, else the first filtered one, else the first in the catalog
pub fn selected_or_default<'a>(selected_id: Option<&str>,
                               filtered: &[&'a Motorcycle],
                               catalog: &'a [Motorcycle]) -> Option<&'a Motorcycle> {
    selected_id
        .and_then(|id| catalog.iter().find(|bike| bike.id == id))
        .or_else(|| filtered.first().copied())
        .or_else(|| catalog.first())
}

/// Headline numbers for a filtered set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogStats<'a> {
    pub count: usize,
    pub average_cc: u32,
    pub average_power_hp: f64,
    pub by_brand: IndexMap<&'a str, usize>
}

impl<'a> CatalogStats<'a> {
    pub fn from_filtered(bikes: &[&'a Motorcycle]) -> CatalogStats<'a> {
        CatalogStats {
            count: bikes.len(),
            average_cc: average_cc(bikes),
            average_power_hp: average_power_hp(bikes),
            by_brand: aggregate_by_brand(bikes)
        }
    }
}
