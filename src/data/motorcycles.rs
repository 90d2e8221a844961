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


use moto_model::catalog::{Cooling, Motorcycle, Status};

#[allow(clippy::too_many_arguments)]
fn bike(id: &str,
        brand: &str,
        model: &str,
        class: &str,
        cc: u32,
        cooling: Cooling,
        transmission: &str,
        platform: &str,
        status: Status,
        notes: &str) -> Motorcycle {
    Motorcycle {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        class: class.to_string(),
        cc,
        cooling,
        transmission: transmission.to_string(),
        platform: platform.to_string(),
        status,
        notes: notes.to_string(),
        wiki_query: format!("{} {}", brand, model)
    }
}

pub fn motorcycles() -> Vec<Motorcycle> {
    use Cooling::*;
    use Status::*;
    vec![
        bike("honda-click-125i", "Honda", "Click 125i", "Scooter", 125, Liquid, "CVT", "eSP 125",
             Current, "Liquid cooled commuter, the go-to base for 59mm bore kits"),
        bike("honda-click-160", "Honda", "Click 160", "Scooter", 157, Liquid, "CVT", "eSP+ 160",
             Current, "4-valve eSP+ engine shared with the ADV and PCX"),
        bike("honda-adv160", "Honda", "ADV 160", "Scooter", 157, Liquid, "CVT", "eSP+ 160",
             Current, "Adventure styled scooter with longer travel suspension"),
        bike("honda-pcx160", "Honda", "PCX 160", "Scooter", 157, Liquid, "CVT", "eSP+ 160",
             Current, "Premium maxi-scooter with traction control"),
        bike("honda-beat", "Honda", "BeAT", "Scooter", 110, Air, "CVT", "eSP 110",
             Current, "Lightweight city scooter"),
        bike("honda-wave-rsx", "Honda", "Wave RSX", "Underbone", 110, Air, "4-speed rotary", "Wave 110",
             Current, "Fuel sipping underbone with a rotary gearbox"),
        bike("honda-xrm125", "Honda", "XRM 125", "Dual Purpose", 125, Air, "4-speed rotary", "XRM 125",
             Current, "Underbone with dual purpose styling and tyres"),
        bike("honda-tmx-supremo", "Honda", "TMX Supremo", "Standard", 150, Air, "5-speed", "TMX 150",
             Current, "Workhorse commuter popular for tricycle builds"),
        bike("yamaha-aerox", "Yamaha", "Aerox 155", "Scooter", 155, Liquid, "CVT", "Blue Core 155 VVA",
             Current, "Sport scooter with variable valve actuation"),
        bike("yamaha-nmax", "Yamaha", "NMAX 155", "Scooter", 155, Liquid, "CVT", "Blue Core 155 VVA",
             Current, "Shares the VVA engine with the Aerox"),
        bike("yamaha-mio-i125", "Yamaha", "Mio i 125", "Scooter", 125, Air, "CVT", "Blue Core 125",
             Current, "Affordable scooter with a huge aftermarket"),
        bike("yamaha-sniper-155", "Yamaha", "Sniper 155", "Underbone", 155, Liquid, "6-speed", "Blue Core 155 VVA",
             Current, "Underbone with the VVA engine and a slipper clutch"),
        bike("yamaha-r15m", "Yamaha", "YZF-R15M", "Sport", 155, Liquid, "6-speed", "Blue Core 155 VVA",
             Current, "Fully faired sport bike with quickshifter"),
        bike("yamaha-xsr155", "Yamaha", "XSR155", "Sport Heritage", 155, Liquid, "6-speed", "Blue Core 155 VVA",
             Current, "Neo-retro styling on the R15 platform"),
        bike("suzuki-raider-r150-fi", "Suzuki", "Raider R150 Fi", "Underbone", 147, Liquid, "6-speed", "Raider 150 DOHC",
             Current, "DOHC underbone, a drag racing staple"),
        bike("suzuki-raider-r150-carb", "Suzuki", "Raider R150 Carb", "Underbone", 150, Liquid, "6-speed", "Raider 150 DOHC",
             Legacy, "Carburetted predecessor, still common in drag builds"),
        bike("suzuki-burgman-street-125", "Suzuki", "Burgman Street 125", "Scooter", 124, Air, "CVT", "Burgman 125",
             Current, "Comfort focused maxi-style scooter"),
        bike("suzuki-gixxer-150", "Suzuki", "Gixxer 150", "Sport Naked", 155, Air, "5-speed", "Gixxer 155",
             Current, "Air cooled naked street bike"),
        bike("kawasaki-barako-ii", "Kawasaki", "Barako II", "Standard", 175, Air, "5-speed", "Barako 175",
             Current, "Heavy duty utility bike"),
        bike("kawasaki-klx150", "Kawasaki", "KLX150", "Dual Purpose", 144, Air, "5-speed", "KLX 150",
             Current, "Entry level trail bike"),
        bike("tvs-apache-rtr-200", "TVS", "Apache RTR 200 4V", "Sport Naked", 198, AirOil, "5-speed", "RTR 200 4V",
             Current, "Oil cooled naked with race tuned fuel injection"),
        bike("ktm-duke-200", "KTM", "200 Duke", "Sport Naked", 199, Liquid, "6-speed", "Duke 200",
             Current, "Single cylinder naked with a trellis frame"),
        bike("kawasaki-ninja-zx-25r", "Kawasaki", "Ninja ZX-25R", "Sport", 249, Liquid, "6-speed", "ZX-25R inline 4",
             Current, "Inline four quarter litre, above the default displacement filter"),
    ]
}
