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

//! Engine build planner.
//!
//! An [`EngineBuild`] holds the in-progress configuration for one base platform and is
//! driven by [`BuildUpdate`]s from the front end. Everything shown to the user comes
//! from [`EngineBuild::summary`], which is recomputed from scratch on every call.

pub mod stage;
pub mod cvt;

use serde::Serialize;
use tracing::{debug, warn};
use utils::numeric::round1;
use crate::catalog::{BikePlatformSpec, PartType, ReferenceData};
use crate::displacement::build_displacement;

pub use stage::{block_area_gain_pct, BuildConstants, BuildStage, BuildTier, CamGrade, estimate_build_power, percent_gain};
pub use cvt::{CvtAdvice, CvtCharacter};

/// Selection key meaning "no aftermarket part"
pub const STOCK_SELECTION: &str = "stock";

/// Where the current bore figure came from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum BoreOrigin {
    Stock,
    Part(String),
    Custom
}

impl BoreOrigin {
    pub fn id(&self) -> &str {
        match self {
            BoreOrigin::Stock => STOCK_SELECTION,
            BoreOrigin::Part(id) => id,
            BoreOrigin::Custom => "custom"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum CamSelection {
    Stock,
    Part { id: String, grade: CamGrade }
}

impl CamSelection {
    pub fn id(&self) -> &str {
        match self {
            CamSelection::Stock => STOCK_SELECTION,
            CamSelection::Part { id, .. } => id
        }
    }

    pub fn grade(&self) -> CamGrade {
        match self {
            CamSelection::Stock => CamGrade::Stock,
            CamSelection::Part { grade, .. } => *grade
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildUpdate {
    PlatformSelected(String),
    BlockSelected(String),
    CamSelected(String),
    BoreEdited(f64),
    StrokeEdited(f64),
    RollerWeightEdited(f64)
}

#[derive(Clone, Debug)]
pub struct EngineBuild {
    platform_key: String,
    platform: BikePlatformSpec,
    bore_mm: f64,
    stroke_mm: f64,
    roller_weight_g: f64,
    bore_origin: BoreOrigin,
    cam: CamSelection
}

impl EngineBuild {
    /// Start a stock build on `platform_key`, or on the first platform if the key is unknown
    pub fn new(reference: &ReferenceData, platform_key: &str) -> EngineBuild {
        let (key, platform) = reference.platform_or_default(platform_key);
        EngineBuild::stock(key, platform)
    }

    fn stock(platform_key: &str, platform: &BikePlatformSpec) -> EngineBuild {
        EngineBuild {
            platform_key: platform_key.to_string(),
            platform: platform.clone(),
            bore_mm: platform.stock_bore,
            stroke_mm: platform.stock_stroke,
            roller_weight_g: platform.stock_roller_weight,
            bore_origin: BoreOrigin::Stock,
            cam: CamSelection::Stock
        }
    }

    pub fn handle_update(&mut self, update: BuildUpdate, reference: &ReferenceData) {
        match update {
            BuildUpdate::PlatformSelected(key) => {
                // Always a full reset, any custom configuration is discarded
                let (key, platform) = reference.platform_or_default(&key);
                *self = EngineBuild::stock(key, platform);
            }
            BuildUpdate::BlockSelected(id) => {
                self.select_block(&id, reference);
            }
            BuildUpdate::CamSelected(id) => {
                self.select_cam(&id, reference);
            }
            BuildUpdate::BoreEdited(bore_mm) => {
                self.bore_mm = bore_mm;
                self.bore_origin = BoreOrigin::Custom;
            }
            BuildUpdate::StrokeEdited(stroke_mm) => {
                self.stroke_mm = stroke_mm;
            }
            BuildUpdate::RollerWeightEdited(roller_weight_g) => {
                if self.platform.is_scooter() {
                    self.roller_weight_g = roller_weight_g;
                } else {
                    debug!("{} has no CVT, ignoring roller weight {}g", self.platform.name, roller_weight_g);
                }
            }
        }
    }

    fn select_block(&mut self, id: &str, reference: &ReferenceData) {
        if id == STOCK_SELECTION {
            self.bore_mm = self.platform.stock_bore;
            self.bore_origin = BoreOrigin::Stock;
            return;
        }
        match reference.part(id) {
            Some(part) if part.part_type == PartType::Block => {
                match part.specs.bore {
                    Some(bore) => {
                        self.bore_mm = bore;
                        self.bore_origin = BoreOrigin::Part(id.to_string());
                    }
                    None => warn!("Block part '{}' doesn't declare a bore, ignoring", id)
                }
            }
            Some(_) => warn!("Part '{}' isn't a cylinder block, ignoring", id),
            None => warn!("No part with id '{}', keeping current block", id)
        }
    }

    fn select_cam(&mut self, id: &str, reference: &ReferenceData) {
        if id == STOCK_SELECTION {
            self.cam = CamSelection::Stock;
            return;
        }
        self.cam = match reference.part(id) {
            Some(part) if part.part_type == PartType::Cam => {
                let grade = CamGrade::for_part(part).unwrap_or_else(|| {
                    debug!("Cam '{}' has an ungraded lift profile, no power bonus applied", id);
                    CamGrade::Stock
                });
                CamSelection::Part { id: id.to_string(), grade }
            }
            _ => {
                warn!("'{}' isn't a known camshaft, using stock cam", id);
                CamSelection::Stock
            }
        };
    }

    pub fn platform_key(&self) -> &str {
        &self.platform_key
    }

    pub fn platform(&self) -> &BikePlatformSpec {
        &self.platform
    }

    pub fn bore_mm(&self) -> f64 {
        self.bore_mm
    }

    pub fn stroke_mm(&self) -> f64 {
        self.stroke_mm
    }

    pub fn roller_weight_g(&self) -> f64 {
        self.roller_weight_g
    }

    pub fn bore_origin(&self) -> &BoreOrigin {
        &self.bore_origin
    }

    pub fn cam(&self) -> &CamSelection {
        &self.cam
    }

    /// Extra stroke over stock in mm, if the build is a stroker
    pub fn stroker_mm(&self) -> Option<f64> {
        match self.stroke_mm > self.platform.stock_stroke {
            true => Some(round1(self.stroke_mm - self.platform.stock_stroke)),
            false => None
        }
    }

    pub fn summary(&self, constants: &BuildConstants) -> BuildSummary {
        let displacement_cc = build_displacement(self.bore_mm, self.stroke_mm);
        let stock_displacement_cc = build_displacement(self.platform.stock_bore, self.platform.stock_stroke);
        let gain = percent_gain(displacement_cc, stock_displacement_cc);
        let tier = BuildTier::for_bore(self.bore_mm, self.platform.stock_bore);
        let base_power_hp = estimate_build_power(displacement_cc, tier, constants);
        let cam_bonus_hp = self.cam.grade().bonus_hp(constants);
        let stage = BuildStage::classify(gain, constants);
        let cvt = match self.platform.is_scooter() {
            true => Some(CvtAdvice::for_roller_weight(self.roller_weight_g, constants)),
            false => None
        };
        BuildSummary {
            platform_key: self.platform_key.clone(),
            platform_name: self.platform.name.clone(),
            bore_mm: self.bore_mm,
            stroke_mm: self.stroke_mm,
            bore_origin: self.bore_origin.clone(),
            cam_id: self.cam.id().to_string(),
            displacement_cc,
            stock_displacement_cc,
            percent_gain: gain,
            tier,
            base_power_hp,
            cam_bonus_hp,
            power_hp: round1(base_power_hp + cam_bonus_hp),
            stage: stage.number(),
            stage_title: stage.title(),
            recommendation: stage.recommendation(),
            stroker_mm: self.stroker_mm(),
            cvt
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildSummary {
    pub platform_key: String,
    pub platform_name: String,
    pub bore_mm: f64,
    pub stroke_mm: f64,
    pub bore_origin: BoreOrigin,
    pub cam_id: String,
    pub displacement_cc: f64,
    pub stock_displacement_cc: f64,
    pub percent_gain: f64,
    pub tier: BuildTier,
    pub base_power_hp: f64,
    pub cam_bonus_hp: f64,
    pub power_hp: f64,
    pub stage: u8,
    pub stage_title: &'static str,
    pub recommendation: &'static str,
    pub stroker_mm: Option<f64>,
    pub cvt: Option<CvtAdvice>
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockOption {
    pub id: String,
    pub label: String,
    pub name: String,
    pub bore_mm: f64,
    pub price_range: String,
    pub area_gain_pct: f64
}

/// Block kits that declare a bore, with their gain over the platform's stock bore
pub fn block_options(reference: &ReferenceData, platform: &BikePlatformSpec) -> Vec<BlockOption> {
    reference.parts_of_type(PartType::Block)
        .filter_map(|part| {
            let bore_mm = part.specs.bore?;
            Some(BlockOption {
                id: part.id.clone(),
                label: format!("{} {}mm", part.brand, bore_mm),
                name: part.name.clone(),
                bore_mm,
                price_range: part.price_range.clone(),
                area_gain_pct: block_area_gain_pct(bore_mm, platform.stock_bore)
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CamOption {
    pub id: String,
    pub label: String,
    pub lift: String,
    pub grade: CamGrade,
    pub character: &'static str,
    pub price_range: String
}

pub fn cam_options(reference: &ReferenceData) -> Vec<CamOption> {
    reference.parts_of_type(PartType::Cam)
        .map(|part| {
            let grade = CamGrade::for_part(part).unwrap_or(CamGrade::Stock);
            CamOption {
                id: part.id.clone(),
                label: format!("{} {}", part.brand, part.name),
                lift: part.specs.lift.clone().unwrap_or_default(),
                grade,
                character: grade.label(),
                price_range: part.price_range.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::builder::{block_options, BoreOrigin, BuildConstants, BuildTier, BuildUpdate, cam_options, CamGrade, CvtCharacter, EngineBuild, estimate_build_power, STOCK_SELECTION};
    use crate::catalog::test_data::reference;

    #[test]
    fn starts_stock() {
        let data = reference();
        let build = EngineBuild::new(&data, "click-125");
        assert_eq!(build.bore_mm(), 52.4);
        assert_eq!(build.stroke_mm(), 57.9);
        assert_eq!(build.roller_weight_g(), 15.0);
        assert_eq!(build.bore_origin(), &BoreOrigin::Stock);
        assert_eq!(build.cam().id(), STOCK_SELECTION);

        let summary = build.summary(&BuildConstants::default());
        assert_eq!(summary.displacement_cc, 124.9);
        assert_eq!(summary.percent_gain, 0.0);
        assert_eq!(summary.tier, BuildTier::Stock);
        assert_eq!(summary.power_hp, 11.2);
        assert_eq!(summary.stage, 1);
        assert_eq!(summary.cvt.unwrap().character, CvtCharacter::Touring);
        assert_eq!(summary.stroker_mm, None);
    }

    #[test]
    fn unknown_platform_uses_first() {
        let data = reference();
        let build = EngineBuild::new(&data, "not-a-bike");
        assert_eq!(build.platform_key(), "click-125");
    }

    #[test]
    fn block_selection_sets_bore_and_origin() {
        let data = reference();
        let mut build = EngineBuild::new(&data, "click-125");
        build.handle_update(BuildUpdate::BlockSelected("block-59".to_string()), &data);
        assert_eq!(build.bore_mm(), 59.0);
        assert_eq!(build.bore_origin(), &BoreOrigin::Part("block-59".to_string()));

        build.handle_update(BuildUpdate::BoreEdited(60.5), &data);
        assert_eq!(build.bore_mm(), 60.5);
        assert_eq!(build.bore_origin(), &BoreOrigin::Custom);
        assert_eq!(build.stroke_mm(), 57.9);

        build.handle_update(BuildUpdate::BlockSelected(STOCK_SELECTION.to_string()), &data);
        assert_eq!(build.bore_mm(), 52.4);
        assert_eq!(build.bore_origin(), &BoreOrigin::Stock);
    }

    #[test]
    fn invalid_block_selection_is_ignored() {
        let data = reference();
        let mut build = EngineBuild::new(&data, "click-125");
        build.handle_update(BuildUpdate::BlockSelected("block-65".to_string()), &data);
        build.handle_update(BuildUpdate::BlockSelected("racing-cam".to_string()), &data);
        build.handle_update(BuildUpdate::BlockSelected("missing".to_string()), &data);
        assert_eq!(build.bore_mm(), 65.0);
        assert_eq!(build.bore_origin().id(), "block-65");
    }

    #[test]
    fn switching_platform_discards_custom_config() {
        let data = reference();
        let mut build = EngineBuild::new(&data, "click-125");
        build.handle_update(BuildUpdate::BoreEdited(61.0), &data);
        build.handle_update(BuildUpdate::StrokeEdited(60.0), &data);
        build.handle_update(BuildUpdate::RollerWeightEdited(9.0), &data);
        build.handle_update(BuildUpdate::CamSelected("racing-cam".to_string()), &data);

        build.handle_update(BuildUpdate::PlatformSelected("raider-150".to_string()), &data);
        assert_eq!(build.platform_key(), "raider-150");
        assert_eq!(build.bore_mm(), 62.0);
        assert_eq!(build.stroke_mm(), 48.8);
        assert_eq!(build.roller_weight_g(), 0.0);
        assert_eq!(build.bore_origin(), &BoreOrigin::Stock);
        assert_eq!(build.cam().grade(), CamGrade::Stock);
    }

    #[test]
    fn manual_platforms_have_no_cvt() {
        let data = reference();
        let mut build = EngineBuild::new(&data, "raider-150");
        build.handle_update(BuildUpdate::RollerWeightEdited(12.0), &data);
        assert_eq!(build.roller_weight_g(), 0.0);
        assert!(build.summary(&BuildConstants::default()).cvt.is_none());
    }

    #[test]
    fn bore_up_with_racing_cam() {
        let data = reference();
        let c = BuildConstants::default();
        let mut build = EngineBuild::new(&data, "click-125");
        build.handle_update(BuildUpdate::BlockSelected("block-59".to_string()), &data);
        build.handle_update(BuildUpdate::CamSelected("racing-cam".to_string()), &data);
        let summary = build.summary(&c);
        assert_eq!(summary.displacement_cc, 158.3);
        assert_eq!(summary.stock_displacement_cc, 124.9);
        assert_eq!(summary.percent_gain, 27.0);
        assert_eq!(summary.tier, BuildTier::Street);
        assert_eq!(summary.base_power_hp, 17.4);
        assert_eq!(summary.cam_bonus_hp, 3.2);
        assert_eq!(summary.power_hp, 20.6);
        assert_eq!(summary.stage, 3);
    }

    #[test]
    fn cam_bonus_is_flat() {
        let data = reference();
        let c = BuildConstants::default();
        let mut build = EngineBuild::new(&data, "click-125");
        for (cam, bonus) in [(STOCK_SELECTION, 0.0), ("touring-cam", 1.5), ("racing-cam", 3.2)] {
            build.handle_update(BuildUpdate::CamSelected(cam.to_string()), &data);
            let summary = build.summary(&c);
            let base = estimate_build_power(summary.displacement_cc, summary.tier, &c);
            assert_eq!(summary.base_power_hp, base);
            assert_eq!(summary.cam_bonus_hp, bonus);
        }
        build.handle_update(BuildUpdate::CamSelected("block-59".to_string()), &data);
        assert_eq!(build.cam().grade(), CamGrade::Stock);
    }

    #[test]
    fn ungraded_cam_adds_nothing() {
        let data = reference();
        let mut build = EngineBuild::new(&data, "click-125");
        build.handle_update(BuildUpdate::CamSelected("mystery-cam".to_string()), &data);
        assert_eq!(build.cam().id(), "mystery-cam");
        let summary = build.summary(&BuildConstants::default());
        assert_eq!(summary.cam_bonus_hp, 0.0);
        assert_eq!(summary.power_hp, summary.base_power_hp);
    }

    #[test]
    fn stroker_builds() {
        let data = reference();
        let mut build = EngineBuild::new(&data, "click-125");
        build.handle_update(BuildUpdate::StrokeEdited(60.0), &data);
        assert_eq!(build.stroker_mm(), Some(2.1));
        // smaller bore than stock stays on the stock tier
        build.handle_update(BuildUpdate::BoreEdited(50.0), &data);
        assert_eq!(build.summary(&BuildConstants::default()).tier, BuildTier::Stock);
    }

    #[test]
    fn part_options() {
        let data = reference();
        let (_, platform) = data.platform_or_default("click-125");
        let blocks = block_options(&data, platform);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].area_gain_pct, 13.0);
        let cams = cam_options(&data);
        assert_eq!(cams.len(), 3);
        assert_eq!(cams[1].character, "Race Spec");
        assert_eq!(cams[2].grade, CamGrade::Stock);
    }
}
