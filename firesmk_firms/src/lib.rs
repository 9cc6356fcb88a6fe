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

/// crate to import VIIRS fire hotspots for North Macedonia from NASAs Fire Information
/// for Resource Management System (FIRMS)
/// see https://firms.modaps.eosdis.nasa.gov/api/country/ for available data and APIs

use std::{fs, path::Path};
use serde::{Serialize,Deserialize};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use firesmk_common::geo::haversine_distance;

pub mod errors;
use errors::{config_error, FirmsError, Result};

pub mod firms;
pub use firms::*;

pub mod dedup;
pub use dedup::*;

/* #region config **************************************************************************************/

/// feed access and cleaning parameters.
/// Note the FIRMS map key is not part of the config - it is rate limited and passed
/// through from the caller
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct FirmsConfig {
    pub base_url: String,
    pub country: String,         // ISO3 code of the query region
    pub sources: Vec<String>,    // FIRMS data source ids, one feed per satellite
    pub day_range: u32,          // full days to query (1-10)
    pub distance_threshold: f64  // minimal hotspot separation in meters
}

impl Default for FirmsConfig {
    fn default()->Self {
        FirmsConfig {
            base_url: "https://firms.modaps.eosdis.nasa.gov".to_string(),
            country: "MKD".to_string(),
            sources: vec![ "VIIRS_NOAA21_NRT".to_string(), "VIIRS_SNPP_NRT".to_string()],
            day_range: 10,
            distance_threshold: 1000.0
        }
    }
}

pub fn load_config (path: impl AsRef<Path>)->Result<FirmsConfig> {
    let input = fs::read_to_string( path)?;
    ron::from_str( &input).map_err( |e| config_error!("{}", e))
}

/* #endregion config */

/* #region hotspot records *****************************************************************************/

/// this is the raw record format of the VIIRS FDDC data product as it is retrieved from the FIRMS server,
/// reduced to the columns we project into FireHotspot (the country API reports more).
/// field descriptions on https://www.earthdata.nasa.gov/data/instruments/viirs/viirs-i-band-375-m-active-fire-data
#[derive(Debug,Clone,Deserialize)]
pub struct RawViirsHotspot {
    pub latitude: f64,
    pub longitude: f64,
    pub bright_ti4: f64,
    pub acq_date: String,
    pub acq_time: u32,
}

/// the cleaned fire detection record we emit - position, brightness temperature and a single
/// combined UTC timestamp
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FireHotspot {
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,  // bright_ti4 I-band brightness temperature in Kelvin
    pub datetime: DateTime<Utc>
}

impl FireHotspot {
    /// project a raw feed row into the output schema - copy the position, rename bright_ti4 to
    /// temperature and fold the acq_date/acq_time pair into one timestamp
    pub fn from_raw (raw: &RawViirsHotspot)->Result<Self> {
        Ok( FireHotspot {
            latitude: raw.latitude,
            longitude: raw.longitude,
            temperature: raw.bright_ti4,
            datetime: parse_acq_datetime( &raw.acq_date, raw.acq_time)?
        })
    }
}

/// combine the acq_date and acq_time fields of a raw record into a single UTC timestamp.
/// acq_time encodes HH:MM as the number HH*100 + MM without leading zeros (5 == 00:05, 930 == 09:30,
/// 1845 == 18:45). FIRMS does not validate the field so we reject out-of-range hours/minutes here
pub fn parse_acq_datetime (acq_date: &str, acq_time: u32)->Result<DateTime<Utc>> {
    let hours = acq_time / 100;
    let minutes = acq_time % 100;
    if hours >= 24 || minutes >= 60 {
        return Err( FirmsError::InvalidAcqTimeError( acq_time))
    }

    let date = NaiveDate::parse_from_str( acq_date, "%Y-%m-%d")
        .map_err( |_| FirmsError::InvalidAcqDateError( acq_date.to_string()))?;
    let dt = date.and_hms_opt( hours, minutes, 0).ok_or( FirmsError::InvalidAcqTimeError( acq_time))?;

    Ok( Utc.from_utc_datetime( &dt))
}

/* #endregion hotspot records */

/* #region queries *************************************************************************************/

/// the hotspot closest to the given position, together with its distance in meters
pub fn closest_hotspot<'a> (hotspots: &'a [FireHotspot], latitude: f64, longitude: f64)->Option<(&'a FireHotspot, f64)> {
    hotspots.iter()
        .map( |h| (h, haversine_distance( latitude, longitude, h.latitude, h.longitude)))
        .min_by( |a,b| a.1.total_cmp( &b.1))
}

/// the hotspots acquired on the given UTC calendar date
pub fn hotspots_for_date<'a> (hotspots: &'a [FireHotspot], date: NaiveDate)->Vec<&'a FireHotspot> {
    hotspots.iter().filter( |h| h.datetime.date_naive() == date).collect()
}

/* #endregion queries */
