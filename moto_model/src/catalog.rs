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

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::str::FromStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::displacement::raw_displacement;
use crate::error::{Error, ErrorKind, ParseLabelError, Result};


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cooling {
    Air,
    Liquid,
    AirOil,
    ModelSpecific,
    Unknown
}

impl Cooling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cooling::Air => "Air",
            Cooling::Liquid => "Liquid",
            Cooling::AirOil => "Air/Oil",
            Cooling::ModelSpecific => "Model-specific",
            Cooling::Unknown => "Unknown"
        }
    }

    /// Anything not recognised maps to `Unknown` rather than failing
    pub fn from_label(label: &str) -> Cooling {
        match label.trim() {
            "Air" => Cooling::Air,
            "Liquid" => Cooling::Liquid,
            "Air/Oil" => Cooling::AirOil,
            "Model-specific" => Cooling::ModelSpecific,
            _ => Cooling::Unknown
        }
    }
}

impl From<String> for Cooling {
    fn from(value: String) -> Self {
        Cooling::from_label(&value)
    }
}

impl From<Cooling> for String {
    fn from(value: Cooling) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Cooling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Current,
    Legacy
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Current => write!(f, "Current"),
            Status::Legacy => write!(f, "Legacy")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motorcycle {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub class: String,
    pub cc: u32,
    pub cooling: Cooling,
    pub transmission: String,
    pub platform: String,
    pub status: Status,
    pub notes: String,
    pub wiki_query: String
}

impl Motorcycle {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    Scooter,
    Underbone
}

/// A base engine the builder starts from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikePlatformSpec {
    pub name: String,
    pub stock_bore: f64,
    pub stock_stroke: f64,
    /// 0 for manual transmission platforms
    pub stock_roller_weight: f64,
    #[serde(rename = "type")]
    pub platform_type: PlatformType
}

impl BikePlatformSpec {
    pub fn is_scooter(&self) -> bool {
        self.platform_type == PlatformType::Scooter
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Block,
    Cam,
    Cvt,
    Exhaust,
    Ecu
}

impl PartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Block => "block",
            PartType::Cam => "cam",
            PartType::Cvt => "cvt",
            PartType::Exhaust => "exhaust",
            PartType::Ecu => "ecu"
        }
    }
}

impl FromStr for PartType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "block" => Ok(PartType::Block),
            "cam" => Ok(PartType::Cam),
            "cvt" => Ok(PartType::Cvt),
            "exhaust" => Ok(PartType::Exhaust),
            "ecu" => Ok(PartType::Ecu),
            _ => Err(ParseLabelError::new("part type", s))
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bore: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_added: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roller_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift: Option<String>
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AftermarketPart {
    pub id: String,
    pub brand: String,
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    #[serde(default)]
    pub specs: PartSpecs,
    pub price_range: String
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockBoreStroke {
    pub bore: f64,
    pub stroke: f64
}

/// The raw reference tables as they are declared or read from a catalog file.
///
/// Nothing is checked here; [`ReferenceData::from_tables`] validates them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceTables {
    pub motorcycles: Vec<Motorcycle>,
    pub platforms: IndexMap<String, BikePlatformSpec>,
    pub parts: Vec<AftermarketPart>,
    pub stock_bore_stroke: IndexMap<String, StockBoreStroke>
}

impl ReferenceTables {
    pub fn from_reader(reader: impl Read) -> Result<ReferenceTables> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Fill any table left empty with the corresponding table from `fallback`
    pub fn or_else(mut self, fallback: ReferenceTables) -> ReferenceTables {
        if self.motorcycles.is_empty() {
            self.motorcycles = fallback.motorcycles;
        }
        if self.platforms.is_empty() {
            self.platforms = fallback.platforms;
        }
        if self.parts.is_empty() {
            self.parts = fallback.parts;
        }
        if self.stock_bore_stroke.is_empty() {
            self.stock_bore_stroke = fallback.stock_bore_stroke;
        }
        self
    }
}

/// Validated, read-only reference data handed to every estimator that needs a lookup.
///
/// Holds at least one motorcycle and one builder platform, every motorcycle
/// id is unique and every `cc` is non-zero.
#[derive(Clone, Debug)]
pub struct ReferenceData {
    motorcycles: Vec<Motorcycle>,
    platforms: IndexMap<String, BikePlatformSpec>,
    default_platform: (String, BikePlatformSpec),
    parts: Vec<AftermarketPart>,
    stock_bore_stroke: IndexMap<String, StockBoreStroke>
}

impl ReferenceData {
    pub fn from_tables(tables: ReferenceTables) -> Result<ReferenceData> {
        validate_tables(&tables)?;
        let default_platform = tables.platforms.get_index(0)
            .map(|(k, v)| (k.clone(), v.clone()))
            .ok_or_else(|| Error::new(ErrorKind::InvalidCatalog, "catalog contains no builder platforms".to_string()))?;
        info!("Loaded reference data: {} motorcycles, {} platforms, {} parts",
              tables.motorcycles.len(), tables.platforms.len(), tables.parts.len());
        Ok(ReferenceData {
            motorcycles: tables.motorcycles,
            platforms: tables.platforms,
            default_platform,
            parts: tables.parts,
            stock_bore_stroke: tables.stock_bore_stroke
        })
    }

    pub fn motorcycles(&self) -> &[Motorcycle] {
        &self.motorcycles
    }

    pub fn motorcycle(&self, id: &str) -> Option<&Motorcycle> {
        self.motorcycles.iter().find(|m| m.id == id)
    }

    /// Look up `id`, falling back to the entry at `fallback_idx` (or the first entry)
    /// when it isn't in the catalog
    pub fn motorcycle_or(&self, id: &str, fallback_idx: usize) -> &Motorcycle {
        match self.motorcycle(id) {
            Some(m) => m,
            None => {
                let idx = if fallback_idx < self.motorcycles.len() { fallback_idx } else { 0 };
                debug!("No motorcycle with id '{}', using '{}'", id, self.motorcycles[idx].id);
                &self.motorcycles[idx]
            }
        }
    }

    pub fn first_motorcycle(&self) -> &Motorcycle {
        &self.motorcycles[0]
    }

    pub fn platforms(&self) -> impl Iterator<Item=(&str, &BikePlatformSpec)> {
        self.platforms.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn platform(&self, key: &str) -> Option<&BikePlatformSpec> {
        self.platforms.get(key)
    }

    /// Look up a platform, falling back to the first declared one
    pub fn platform_or_default(&self, key: &str) -> (&str, &BikePlatformSpec) {
        match self.platforms.get_key_value(key) {
            Some((k, v)) => (k.as_str(), v),
            None => {
                let (k, v) = self.default_platform();
                debug!("No platform '{}', using '{}'", key, k);
                (k, v)
            }
        }
    }

    pub fn default_platform(&self) -> (&str, &BikePlatformSpec) {
        (self.default_platform.0.as_str(), &self.default_platform.1)
    }

    pub fn parts(&self) -> &[AftermarketPart] {
        &self.parts
    }

    pub fn part(&self, id: &str) -> Option<&AftermarketPart> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn parts_of_type(&self, part_type: PartType) -> impl Iterator<Item=&AftermarketPart> {
        self.parts.iter().filter(move |p| p.part_type == part_type)
    }

    pub fn stock_geometry(&self, motorcycle_id: &str) -> Option<&StockBoreStroke> {
        self.stock_bore_stroke.get(motorcycle_id)
    }

    /// Unrounded stock displacement for catalog models with a known bore and stroke
    pub fn stock_displacement(&self, motorcycle_id: &str) -> Option<f64> {
        self.stock_geometry(motorcycle_id).map(|g| raw_displacement(g.bore, g.stroke, 1))
    }
}

fn validate_tables(tables: &ReferenceTables) -> Result<()> {
    if tables.motorcycles.is_empty() {
        return Err(Error::new(ErrorKind::InvalidCatalog, "catalog contains no motorcycles".to_string()));
    }
    if tables.platforms.is_empty() {
        return Err(Error::new(ErrorKind::InvalidCatalog, "catalog contains no builder platforms".to_string()));
    }
    let mut seen_ids = HashSet::new();
    for bike in &tables.motorcycles {
        if !seen_ids.insert(bike.id.as_str()) {
            return Err(Error::new(ErrorKind::InvalidCatalog,
                                  format!("motorcycle id '{}' appears more than once", bike.id)));
        }
        if bike.cc == 0 {
            return Err(Error::new(ErrorKind::InvalidCatalog,
                                  format!("motorcycle '{}' has a displacement of 0cc", bike.id)));
        }
    }
    let mut seen_part_ids = HashSet::new();
    for part in &tables.parts {
        if !seen_part_ids.insert(part.id.as_str()) {
            return Err(Error::new(ErrorKind::InvalidCatalog,
                                  format!("part id '{}' appears more than once", part.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_data {
    use indexmap::IndexMap;
    use crate::catalog::{AftermarketPart, BikePlatformSpec, Cooling, Motorcycle, PartSpecs, PartType, PlatformType, ReferenceData, ReferenceTables, Status, StockBoreStroke};

    pub fn bike(id: &str, brand: &str, class: &str, cc: u32, cooling: Cooling) -> Motorcycle {
        Motorcycle {
            id: id.to_string(),
            brand: brand.to_string(),
            model: id.to_string(),
            class: class.to_string(),
            cc,
            cooling,
            transmission: "CVT".to_string(),
            platform: format!("{} platform", brand),
            status: Status::Current,
            notes: String::new(),
            wiki_query: id.to_string()
        }
    }

    fn part(id: &str, part_type: PartType, specs: PartSpecs) -> AftermarketPart {
        AftermarketPart {
            id: id.to_string(),
            brand: "Test".to_string(),
            name: id.to_string(),
            part_type,
            specs,
            price_range: "-".to_string()
        }
    }

    pub fn tables() -> ReferenceTables {
        let mut platforms = IndexMap::new();
        platforms.insert("click-125".to_string(), BikePlatformSpec {
            name: "Click 125".to_string(),
            stock_bore: 52.4,
            stock_stroke: 57.9,
            stock_roller_weight: 15.0,
            platform_type: PlatformType::Scooter
        });
        platforms.insert("raider-150".to_string(), BikePlatformSpec {
            name: "Raider 150".to_string(),
            stock_bore: 62.0,
            stock_stroke: 48.8,
            stock_roller_weight: 0.0,
            platform_type: PlatformType::Underbone
        });
        let mut stock_bore_stroke = IndexMap::new();
        stock_bore_stroke.insert("click".to_string(), StockBoreStroke { bore: 52.4, stroke: 57.9 });
        ReferenceTables {
            motorcycles: vec![
                bike("click", "Honda", "Scooter", 125, Cooling::Liquid),
                bike("raider", "Suzuki", "Underbone", 147, Cooling::Liquid),
                bike("wave", "Honda", "Underbone", 110, Cooling::Air),
                bike("r15", "Yamaha", "Sport", 155, Cooling::Liquid),
            ],
            platforms,
            parts: vec![
                part("block-59", PartType::Block, PartSpecs { bore: Some(59.0), ..Default::default() }),
                part("block-65", PartType::Block, PartSpecs { bore: Some(65.0), ..Default::default() }),
                part("touring-cam", PartType::Cam, PartSpecs { lift: Some("Low-Mid".to_string()), ..Default::default() }),
                part("racing-cam", PartType::Cam, PartSpecs { lift: Some("High".to_string()), ..Default::default() }),
                part("mystery-cam", PartType::Cam, PartSpecs { lift: Some("Mid-High".to_string()), ..Default::default() }),
                part("pulley", PartType::Cvt, PartSpecs { roller_weight: Some(9.0), ..Default::default() }),
            ],
            stock_bore_stroke
        }
    }

    pub fn reference() -> ReferenceData {
        ReferenceData::from_tables(tables()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Cooling, PartType, ReferenceData, ReferenceTables};
    use crate::catalog::test_data::{bike, reference, tables};
    use crate::error::ErrorKind;

    #[test]
    fn cooling_labels() {
        assert_eq!(Cooling::from_label("Air/Oil"), Cooling::AirOil);
        assert_eq!(Cooling::from_label("Model-specific"), Cooling::ModelSpecific);
        assert_eq!(Cooling::from_label("Oil"), Cooling::Unknown);
        let c: Cooling = serde_json::from_str("\"Liquid\"").unwrap();
        assert_eq!(c, Cooling::Liquid);
        assert_eq!(serde_json::to_string(&Cooling::AirOil).unwrap(), "\"Air/Oil\"");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut t = tables();
        t.motorcycles.push(bike("click", "Honda", "Scooter", 160, Cooling::Liquid));
        let err = ReferenceData::from_tables(t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCatalog);
    }

    #[test]
    fn rejects_zero_cc() {
        let mut t = tables();
        t.motorcycles.push(bike("ghost", "Honda", "Scooter", 0, Cooling::Liquid));
        let err = ReferenceData::from_tables(t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCatalog);
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = ReferenceData::from_tables(ReferenceTables::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCatalog);
    }

    #[test]
    fn lookup_misses_fall_back() {
        let data = reference();
        assert_eq!(data.motorcycle_or("missing", 1).id, "raider");
        assert_eq!(data.motorcycle_or("missing", 99).id, "click");
        assert_eq!(data.motorcycle_or("wave", 1).id, "wave");
        assert_eq!(data.platform_or_default("missing").0, "click-125");
        assert_eq!(data.platform_or_default("raider-150").1.name, "Raider 150");
    }

    #[test]
    fn default_platform_is_first_declared() {
        let data = reference();
        let (key, platform) = data.default_platform();
        assert_eq!(key, "click-125");
        assert_eq!(platform.stock_bore, 52.4);

        let mut t = tables();
        t.platforms.clear();
        let err = ReferenceData::from_tables(t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCatalog);
    }

    #[test]
    fn parts_by_type() {
        let data = reference();
        let blocks: Vec<_> = data.parts_of_type(PartType::Block).map(|p| p.id.as_str()).collect();
        assert_eq!(blocks, vec!["block-59", "block-65"]);
        assert!(data.part("nope").is_none());
    }

    #[test]
    fn stock_displacement_is_unrounded() {
        let data = reference();
        let cc = data.stock_displacement("click").unwrap();
        assert!(cc > 124.86 && cc < 124.87);
        assert!(data.stock_displacement("r15").is_none());
    }

    #[test]
    fn tables_from_json() {
        let json = r#"{
            "motorcycles": [{
                "id": "beat", "brand": "Honda", "model": "BeAT", "class": "Scooter", "cc": 110,
                "cooling": "Air", "transmission": "CVT", "platform": "eSP 110", "status": "Current",
                "notes": "", "wikiQuery": "Honda BeAT"
            }],
            "parts": [{
                "id": "cam", "brand": "X", "name": "Cam", "type": "cam",
                "specs": { "lift": "High" }, "priceRange": "1"
            }]
        }"#;
        let t = ReferenceTables::from_reader(json.as_bytes()).unwrap().or_else(tables());
        assert_eq!(t.motorcycles.len(), 1);
        assert_eq!(t.parts.len(), 1);
        assert_eq!(t.platforms.len(), 2);
        let data = ReferenceData::from_tables(t).unwrap();
        assert_eq!(data.first_motorcycle().wiki_query, "Honda BeAT");
        assert_eq!(data.part("cam").unwrap().specs.lift.as_deref(), Some("High"));
    }

    #[test]
    fn part_type_parse() {
        assert_eq!("Block".parse::<PartType>().unwrap(), PartType::Block);
        assert!("turbo".parse::<PartType>().is_err());
    }
}
