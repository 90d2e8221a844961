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


use std::fs;
use std::path::PathBuf;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use moto_model::builder::BuildConstants;
use moto_model::explorer::DEFAULT_MAX_CC;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    catalog_path: String,
    log_file: String,
    default_max_cc: u32,
    default_rpm_limit: u32,
    #[serde(default)]
    build: BuildConstants
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog_path: String::new(),
            log_file: Settings::DEFAULT_LOG_FILE.to_string(),
            default_max_cc: DEFAULT_MAX_CC,
            default_rpm_limit: Settings::DEFAULT_RPM_LIMIT_VALUE,
            build: BuildConstants::default()
        }
    }
}

impl Settings {
    const CATALOG_PATH: &'static str = "catalog_path";
    const LOG_FILE: &'static str = "log_file";
    const DEFAULT_MAX_CC: &'static str = "default_max_cc";
    const DEFAULT_RPM_LIMIT: &'static str = "default_rpm_limit";
    const CONFIG_FILENAME: &'static str = "moto-lab-conf";
    const DEFAULT_LOG_FILE: &'static str = "moto_lab.log";
    const DEFAULT_RPM_LIMIT_VALUE: u32 = 12000;

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default(Settings::CATALOG_PATH, "")?
            .set_default(Settings::LOG_FILE, Settings::DEFAULT_LOG_FILE)?
            .set_default(Settings::DEFAULT_MAX_CC, DEFAULT_MAX_CC as i64)?
            .set_default(Settings::DEFAULT_RPM_LIMIT, Settings::DEFAULT_RPM_LIMIT_VALUE as i64)
    }

    fn config_dir_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "zephyrj", "moto-lab")
            .map(|dirs| dirs.config_dir().join(Settings::CONFIG_FILENAME))
    }

    /// Layer the settings file in the platform config dir, then one in the working
    /// dir, then `APP_*` environment variables over the defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Settings::defaults()?;
        if let Some(path) = Settings::config_dir_file() {
            builder = builder.add_source(config::File::with_name(&path.to_string_lossy()).required(false));
        }
        builder
            .add_source(config::File::with_name(Settings::CONFIG_FILENAME).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        match self.catalog_path.trim() {
            "" => None,
            path => Some(PathBuf::from(path))
        }
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn default_max_cc(&self) -> u32 {
        self.default_max_cc
    }

    pub fn default_rpm_limit(&self) -> u32 {
        self.default_rpm_limit
    }

    pub fn build_constants(&self) -> &BuildConstants {
        &self.build
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&self)
    }

    pub fn write(&self) -> std::io::Result<PathBuf> {
        let path = PathBuf::from(format!("{}.toml", Settings::CONFIG_FILENAME));
        fs::write(&path, self.to_toml().map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;
    use crate::settings::Settings;

    fn load_str(toml: &str) -> Settings {
        Settings::defaults().unwrap()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_deserialize() {
        let settings = load_str("");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.catalog_path(), None);
        assert_eq!(settings.default_max_cc(), 200);
        assert_eq!(settings.default_rpm_limit(), 12000);
    }

    #[test]
    fn partial_build_table() {
        let settings = load_str(r#"
            catalog_path = "bikes.json"
            [build]
            racing_cam_bonus_hp = 4.0
        "#);
        assert_eq!(settings.catalog_path().unwrap().to_string_lossy(), "bikes.json");
        assert_eq!(settings.build_constants().racing_cam_bonus_hp, 4.0);
        assert_eq!(settings.build_constants().touring_cam_bonus_hp, 1.5);
    }

    #[test]
    fn toml_output_reloads() {
        let mut settings = Settings::default();
        settings.default_max_cc = 160;
        let reloaded = load_str(&settings.to_toml().unwrap());
        assert_eq!(reloaded, settings);
    }
}
