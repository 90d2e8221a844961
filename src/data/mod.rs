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

mod motorcycles;
mod parts;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};
use moto_model::{ReferenceData, ReferenceTables};
use moto_model::error::Result;

pub fn builtin_tables() -> ReferenceTables {
    ReferenceTables {
        motorcycles: motorcycles::motorcycles(),
        platforms: parts::platforms(),
        parts: parts::parts(),
        stock_bore_stroke: parts::stock_bore_stroke()
    }
}

fn read_catalog_file(path: &Path) -> Result<ReferenceData> {
    info!("Reading catalog from {}", path.display());
    let file = File::open(path)?;
    let tables = ReferenceTables::from_reader(BufReader::new(file))?;
    ReferenceData::from_tables(tables.or_else(builtin_tables()))
}

/// Reference data from `catalog_path` if set, with any table it leaves empty taken from
/// the built-in catalog. Falls back to the built-in catalog if the file can't be used
pub fn load_reference_data(catalog_path: Option<&Path>) -> Result<ReferenceData> {
    if let Some(path) = catalog_path {
        match read_catalog_file(path) {
            Ok(reference) => return Ok(reference),
            Err(e) => warn!("Couldn't use catalog {}, falling back to built-in data. {}", path.display(), e)
        }
    }
    ReferenceData::from_tables(builtin_tables())
}
