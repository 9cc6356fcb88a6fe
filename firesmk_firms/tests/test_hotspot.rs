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

use std::fs::File;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use firesmk_firms::errors::FirmsError;
use firesmk_firms::{
    closest_hotspot, filter_by_distance, hotspots_for_date, load_config, merge_feeds,
    parse_acq_datetime, read_hotspots, FireHotspot, RawViirsHotspot
};

fn utc (y: i32, mo: u32, d: u32, h: u32, mi: u32)->DateTime<Utc> {
    Utc.with_ymd_and_hms( y, mo, d, h, mi, 0).unwrap()
}

fn raw (latitude: f64, longitude: f64, bright_ti4: f64, acq_date: &str, acq_time: u32)->RawViirsHotspot {
    RawViirsHotspot { latitude, longitude, bright_ti4, acq_date: acq_date.to_string(), acq_time }
}

#[test]
fn test_parse_acq_datetime () {
    assert_eq!( parse_acq_datetime( "2024-07-05", 0).unwrap(), utc(2024,7,5, 0,0));
    assert_eq!( parse_acq_datetime( "2024-07-05", 5).unwrap(), utc(2024,7,5, 0,5));
    assert_eq!( parse_acq_datetime( "2024-07-05", 45).unwrap(), utc(2024,7,5, 0,45));
    assert_eq!( parse_acq_datetime( "2024-07-05", 930).unwrap(), utc(2024,7,5, 9,30));
    assert_eq!( parse_acq_datetime( "2024-07-05", 1845).unwrap(), utc(2024,7,5, 18,45));
}

#[test]
fn test_invalid_acq_time () {
    assert!( matches!( parse_acq_datetime( "2024-07-05", 975), Err(FirmsError::InvalidAcqTimeError(975))));
    assert!( matches!( parse_acq_datetime( "2024-07-05", 2360), Err(FirmsError::InvalidAcqTimeError(_))));
    assert!( matches!( parse_acq_datetime( "2024-07-05", 2400), Err(FirmsError::InvalidAcqTimeError(_))));
    assert!( matches!( parse_acq_datetime( "2024-07-05", 10000), Err(FirmsError::InvalidAcqTimeError(_))));
}

#[test]
fn test_invalid_acq_date () {
    assert!( matches!( parse_acq_datetime( "07/05/2024", 930), Err(FirmsError::InvalidAcqDateError(_))));
}

#[test]
fn test_normalize () {
    let hs = FireHotspot::from_raw( &raw( 41.35, 21.55, 337.2, "2024-07-05", 1012)).unwrap();
    assert_eq!( hs.latitude, 41.35);
    assert_eq!( hs.longitude, 21.55);
    assert_eq!( hs.temperature, 337.2);
    assert_eq!( hs.datetime, utc(2024,7,5, 10,12));
}

#[test]
fn test_merge_single_feed_is_identity () {
    let a = vec![
        raw( 41.35, 21.55, 337.2, "2024-07-05", 1012),
        raw( 41.37, 21.55, 351.9, "2024-07-05", 1012),
    ];
    let merged = merge_feeds( vec![a.clone()]);
    assert_eq!( merged.len(), 2);
    assert_eq!( merged[0].bright_ti4, a[0].bright_ti4);
    assert_eq!( merged[1].bright_ti4, a[1].bright_ti4);
}

#[test]
fn test_merge_drops_cross_feed_duplicates () {
    let a = vec![
        raw( 41.35, 21.55, 337.2, "2024-07-05", 1012),
        raw( 41.37, 21.55, 351.9, "2024-07-05", 1012),
    ];
    let b = vec![
        raw( 41.35, 21.55, 329.0, "2024-07-05", 1140), // same position and date as a[0]
        raw( 41.9, 21.4, 333.3, "2024-07-05", 1140),
    ];

    let merged = merge_feeds( vec![a, b]);
    assert_eq!( merged.len(), 3);
    assert_eq!( merged[0].bright_ti4, 337.2); // the first feed occurrence wins
    assert_eq!( merged[0].acq_time, 1012);
    assert_eq!( merged[1].bright_ti4, 351.9);
    assert_eq!( merged[2].bright_ti4, 333.3);
}

#[test]
fn test_merge_keeps_same_position_on_other_date () {
    let a = vec![ raw( 41.35, 21.55, 337.2, "2024-07-05", 1012)];
    let b = vec![ raw( 41.35, 21.55, 341.8, "2024-07-06", 1120)];

    let merged = merge_feeds( vec![a, b]);
    assert_eq!( merged.len(), 2);
}

#[test]
fn test_missing_column () {
    let data = "country_id,latitude,longitude,acq_date,acq_time\nMKD,41.35,21.55,2024-07-05,1012\n";
    match read_hotspots( data.as_bytes()) {
        Err(FirmsError::MissingFieldError(msg)) => assert!( msg.contains( "bright_ti4")),
        other => panic!( "expected missing field error, got {:?}", other)
    }
}

#[test]
fn test_read_fixture () {
    let file = File::open( "tests/VIIRS_NOAA21_MKD_2024-07-05.csv").unwrap();
    let hotspots = read_hotspots( file).unwrap();

    assert_eq!( hotspots.len(), 4);
    assert_eq!( hotspots[0].latitude, 41.35);
    assert_eq!( hotspots[0].longitude, 21.55);
    assert_eq!( hotspots[0].bright_ti4, 337.2);
    assert_eq!( hotspots[0].acq_date, "2024-07-05");
    assert_eq!( hotspots[0].acq_time, 1012);
}

/// the full import path minus the network fetch: read both per-satellite feeds, merge,
/// normalize and distance filter
#[test]
fn test_import_two_feeds () {
    let a = read_hotspots( File::open( "tests/VIIRS_NOAA21_MKD_2024-07-05.csv").unwrap()).unwrap();
    let b = read_hotspots( File::open( "tests/VIIRS_SNPP_MKD_2024-07-05.csv").unwrap()).unwrap();

    let merged = merge_feeds( vec![a, b]);
    assert_eq!( merged.len(), 6); // the first S-NPP row repeats the first NOAA-21 position/date

    let hotspots: Vec<FireHotspot> = merged.iter().map( |r| FireHotspot::from_raw(r).unwrap()).collect();
    let kept = filter_by_distance( hotspots, 1000.0);

    let temps: Vec<f64> = kept.iter().map( |h| h.temperature).collect();
    assert_eq!( temps, vec![337.2, 351.9, 340.0, 333.3]);

    assert_eq!( kept[0].datetime, utc(2024,7,5, 10,12));
    assert_eq!( kept[3].datetime, utc(2024,7,5, 11,40));
}

#[test]
fn test_closest_hotspot () {
    let hotspots = vec![
        FireHotspot { latitude: 41.35, longitude: 21.55, temperature: 337.2, datetime: utc(2024,7,5, 10,12) },
        FireHotspot { latitude: 41.9, longitude: 21.4, temperature: 333.3, datetime: utc(2024,7,5, 11,40) },
        FireHotspot { latitude: 42.01, longitude: 22.33, temperature: 340.0, datetime: utc(2024,7,5, 10,13) },
    ];

    // from the Skopje city center
    let (hs, dist) = closest_hotspot( &hotspots, 41.9981, 21.4254).unwrap();
    assert_eq!( hs.latitude, 41.9);
    assert!( (dist - 11108.6).abs() < 1.0);

    assert!( closest_hotspot( &[], 41.9981, 21.4254).is_none());
}

#[test]
fn test_hotspots_for_date () {
    let hotspots = vec![
        FireHotspot { latitude: 41.35, longitude: 21.55, temperature: 337.2, datetime: utc(2024,7,5, 10,12) },
        FireHotspot { latitude: 41.35, longitude: 21.56, temperature: 335.0, datetime: utc(2024,7,6, 11,20) },
        FireHotspot { latitude: 41.9, longitude: 21.4, temperature: 333.3, datetime: utc(2024,7,5, 23,59) },
    ];

    let date = NaiveDate::from_ymd_opt( 2024, 7, 5).unwrap();
    let for_date = hotspots_for_date( &hotspots, date);

    assert_eq!( for_date.len(), 2);
    assert_eq!( for_date[0].temperature, 337.2);
    assert_eq!( for_date[1].temperature, 333.3);
}

#[test]
fn test_record_json () {
    let hs = FireHotspot { latitude: 41.35, longitude: 21.55, temperature: 337.2, datetime: utc(2024,7,5, 10,12) };

    let json = serde_json::to_string( &hs).unwrap();
    assert!( json.contains( "\"temperature\":337.2"));
    assert!( json.contains( "2024-07-05T10:12:00")); // ISO-8601 UTC timestamp

    let back: FireHotspot = serde_json::from_str( &json).unwrap();
    assert_eq!( back, hs);
}

#[test]
fn test_load_config () {
    let config = load_config( "tests/firms_mkd.ron").unwrap();

    assert_eq!( config.country, "MKD");
    assert_eq!( config.sources, vec![ "VIIRS_NOAA21_NRT".to_string(), "VIIRS_NOAA20_NRT".to_string()]);
    assert_eq!( config.day_range, 3);
    assert_eq!( config.distance_threshold, 500.0);
    assert_eq!( config.base_url, "https://firms.modaps.eosdis.nasa.gov"); // not in the file, default applies
}
