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

/// a module that retrieves hotspot feeds from the FIRMS country API and merges the
/// per-satellite feeds into one record sequence

use std::collections::HashSet;
use std::io;
use reqwest::Client;
use csv;
use tracing::{debug,info};
use firesmk_common::net::get_text;
use crate::{FirmsConfig, FireHotspot, RawViirsHotspot};
use crate::errors::{missing_field, FirmsError, Result};
use crate::dedup::filter_by_distance;

/// the columns FireHotspot is projected from - anything else the feed reports is ignored
const REQUIRED_COLUMNS: [&str; 5] = ["latitude", "longitude", "bright_ti4", "acq_date", "acq_time"];

/// according to https://firms.modaps.eosdis.nasa.gov/api/country/
///   [BASE_URL]/api/country/csv/[MAP_KEY]/[SOURCE]/[COUNTRY]/[DAY_RANGE]
///    e.g. /api/country/csv/534b391abcdf3cf5969cb7ec8ce07de5/VIIRS_NOAA21_NRT/MKD/10
/// Note that only full day ranges are allowed (1-10), which also means consecutive downloads do overlap
pub fn country_request_url (config: &FirmsConfig, map_key: &str, source: &str)->String {
    format!( "{}/api/country/csv/{}/{}/{}/{}",
            config.base_url, map_key, source, config.country, config.day_range)
}

/// parse the CSV data provided by the reader into raw hotspot records.
/// The header is checked for the projected columns up front so that a feed schema change
/// fails the run instead of producing partial records
pub fn read_hotspots (reader: impl io::Read)->Result<Vec<RawViirsHotspot>> {
    let mut csv_reader = csv::Reader::from_reader( reader);

    let headers = csv_reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any( |h| h == col) {
            return Err( missing_field!("column {} not in feed header", col))
        }
    }

    let mut hotspots: Vec<RawViirsHotspot> = Vec::new();
    for res in csv_reader.deserialize() {
        let raw_hs: RawViirsHotspot = res?;
        hotspots.push( raw_hs);
    }

    Ok(hotspots)
}

/// retrieve the current hotspot CSV for a single data source
pub async fn fetch_hotspots (client: &Client, config: &FirmsConfig, map_key: &str, source: &str)->Result<Vec<RawViirsHotspot>> {
    let url = country_request_url( config, map_key, source);
    let body = get_text( client, &url).await?;
    let hotspots = read_hotspots( body.as_bytes())?;
    info!( "retrieved {} hotspots from {}", hotspots.len(), source);

    Ok(hotspots)
}

/// union the per-satellite feeds, dropping records that repeat an earlier
/// (latitude, longitude, acq_date) key. Feed and record order is preserved and the first
/// occurrence wins. Keys compare with exact (bitwise) float equality - feeds reporting the
/// same pixel at differing precision are NOT collapsed here, that is what the distance
/// based filter is for
pub fn merge_feeds (feeds: Vec<Vec<RawViirsHotspot>>)->Vec<RawViirsHotspot> {
    let mut seen: HashSet<(u64,u64,String)> = HashSet::new();
    let mut merged: Vec<RawViirsHotspot> = Vec::new();

    for feed in feeds {
        for hs in feed {
            let key = (hs.latitude.to_bits(), hs.longitude.to_bits(), hs.acq_date.clone());
            if seen.insert( key) {
                merged.push( hs);
            }
        }
    }

    merged
}

/// one shot import: fetch the configured feeds in order, merge them, project the raw rows
/// into output records and drop hotspots within the configured distance of an earlier one.
/// Any feed failure aborts the whole run - there is no partial output and no re-try
pub async fn get_current_hotspots (client: &Client, config: &FirmsConfig, map_key: &str)->Result<Vec<FireHotspot>> {
    let mut feeds: Vec<Vec<RawViirsHotspot>> = Vec::with_capacity( config.sources.len());
    for source in &config.sources {
        feeds.push( fetch_hotspots( client, config, map_key, source).await?);
    }

    let merged = merge_feeds( feeds);
    let n_merged = merged.len();

    let mut hotspots: Vec<FireHotspot> = Vec::with_capacity( n_merged);
    for raw_hs in &merged {
        hotspots.push( FireHotspot::from_raw( raw_hs)?);
    }

    let kept = filter_by_distance( hotspots, config.distance_threshold);
    debug!( "merged {} records, kept {} after distance filtering", n_merged, kept.len());

    Ok(kept)
}
