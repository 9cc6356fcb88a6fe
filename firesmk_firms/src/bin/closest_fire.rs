/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “FiresMK” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::{fs, path::PathBuf};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use firesmk_common::datetime::utc_now;
use firesmk_firms::{closest_hotspot, hotspots_for_date, FireHotspot};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "find the fire hotspot closest to a position, from a previously retrieved JSON record file")]
pub struct Args {
    /// only consider hotspots acquired on this UTC date (YYYY-MM-DD)
    #[arg(short,long)]
    pub date: Option<NaiveDate>,

    /// only consider hotspots acquired today (UTC)
    #[arg(long, conflicts_with = "date")]
    pub today: bool,

    /// JSON record file as produced by get_fires
    pub path: PathBuf,

    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    #[arg(allow_negative_numbers = true)]
    pub longitude: f64
}

fn main()->Result<()> {
    let args = Args::parse();

    let input = fs::read_to_string( &args.path)?;
    let hotspots: Vec<FireHotspot> = serde_json::from_str( &input)?;

    let date = if args.today { Some( utc_now().date_naive()) } else { args.date };
    let hotspots: Vec<FireHotspot> = match date {
        Some(date) => hotspots_for_date( &hotspots, date).into_iter().cloned().collect(),
        None => hotspots
    };

    match closest_hotspot( &hotspots, args.latitude, args.longitude) {
        Some((hs,dist)) => {
            println!("closest hotspot: {}", serde_json::to_string( hs)?);
            println!("distance: {:.0} m", dist);
            Ok(())
        }
        None => Err( anyhow!("no hotspots in {}", args.path.display()))
    }
}
