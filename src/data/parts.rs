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


use indexmap::IndexMap;
use moto_model::catalog::{AftermarketPart, BikePlatformSpec, PartSpecs, PartType, PlatformType, StockBoreStroke};

fn platform(name: &str, stock_bore: f64, stock_stroke: f64, stock_roller_weight: f64, platform_type: PlatformType) -> BikePlatformSpec {
    BikePlatformSpec { name: name.to_string(), stock_bore, stock_stroke, stock_roller_weight, platform_type }
}

/// Base engines offered by the builder, first entry is the default
pub fn platforms() -> IndexMap<String, BikePlatformSpec> {
    use PlatformType::*;
    [
        ("honda-click-125i", platform("Honda Click 125i", 52.4, 57.9, 15.0, Scooter)),
        ("honda-click-150i", platform("Honda Click 150i", 57.3, 57.9, 15.5, Scooter)),
        ("yamaha-mio-i125", platform("Yamaha Mio i 125 (M3)", 52.4, 57.9, 10.0, Scooter)),
        ("suzuki-raider-r150", platform("Suzuki Raider R150 Fi", 62.0, 48.8, 0.0, Underbone)),
        ("yamaha-aerox-155", platform("Yamaha Aerox 155", 58.0, 58.7, 13.0, Scooter)),
        ("yamaha-nmax-155", platform("Yamaha NMAX 155", 58.0, 58.7, 13.0, Scooter)),
    ].into_iter()
        .map(|(key, spec)| (key.to_string(), spec))
        .collect()
}

fn part(id: &str, brand: &str, name: &str, part_type: PartType, specs: PartSpecs, price_range: &str) -> AftermarketPart {
    AftermarketPart {
        id: id.to_string(),
        brand: brand.to_string(),
        name: name.to_string(),
        part_type,
        specs,
        price_range: price_range.to_string()
    }
}

fn bore(mm: f64) -> PartSpecs {
    PartSpecs { bore: Some(mm), ..Default::default() }
}

fn lift(label: &str) -> PartSpecs {
    PartSpecs { lift: Some(label.to_string()), ..Default::default() }
}

fn rollers(grams: f64) -> PartSpecs {
    PartSpecs { roller_weight: Some(grams), ..Default::default() }
}

pub fn parts() -> Vec<AftermarketPart> {
    use PartType::*;
    vec![
        part("jvt-59-chrome", "JVT", "59mm Chrome Bore Kit", Block, bore(59.0), "₱3,500 - ₱4,500"),
        part("rs8-59-steel", "RS8", "59mm Steel Bore Kit", Block, bore(59.0), "₱2,500 - ₱3,200"),
        part("mtrt-63-ceramic", "MTRT", "63mm Ceramic Block", Block, bore(63.0), "₱6,000 - ₱8,000"),
        part("uma-65-ceramic", "UMA Racing", "65mm Superhead Block", Block, bore(65.0), "₱9,000+"),
        part("jvt-s1-cam", "JVT", "Stage 1 Touring Cam", Cam, lift("Low-Mid"), "₱1,800"),
        part("mtrt-evo-cam", "MTRT", "Evo Racing Cam", Cam, lift("High"), "₱2,500"),
        part("rs8-v4-pulley", "RS8", "V4 Pulley Set", Cvt, rollers(9.0), "₱2,200"),
        part("jvt-chrome-pulley", "JVT", "Chrome Pulley Set", Cvt, rollers(11.0), "₱2,800"),
    ]
}

/// Factory bore and stroke for catalog models, keyed by motorcycle id
pub fn stock_bore_stroke() -> IndexMap<String, StockBoreStroke> {
    [
        ("honda-click-125i", 52.4, 57.9),
        ("honda-click-160", 60.0, 55.5),
        ("honda-adv160", 60.0, 55.5),
        ("honda-pcx160", 60.0, 55.5),
        ("yamaha-aerox", 58.0, 58.7),
        ("yamaha-nmax", 58.0, 58.7),
        ("yamaha-sniper-155", 58.0, 58.7),
        ("yamaha-r15m", 58.0, 58.7),
        ("suzuki-raider-r150-fi", 62.0, 48.8),
        ("suzuki-raider-r150-carb", 62.0, 48.8),
    ].into_iter()
        .map(|(id, bore, stroke)| (id.to_string(), StockBoreStroke { bore, stroke }))
        .collect()
}
