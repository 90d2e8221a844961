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


mod cli;
mod data;
mod settings;

use std::env;
use std::process::ExitCode;
use clap::Parser;
use tracing::{error, info, warn};
use crate::cli::Cli;
use crate::settings::Settings;

fn init_logging(log_file: &str) {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, log_file);
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded_settings = Settings::load();
    let settings = match &loaded_settings {
        Ok(settings) => settings.clone(),
        Err(_) => Settings::default()
    };
    init_logging(settings.log_file());
    if let Err(e) = loaded_settings {
        warn!("Failed to load settings, using defaults. {}", e.to_string());
    }

    let catalog_path = cli.catalog.clone().or_else(|| settings.catalog_path());
    let result = match data::load_reference_data(catalog_path.as_deref()) {
        Ok(reference) => cli::run(cli, &settings, &reference),
        Err(e) => Err(e.into())
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
