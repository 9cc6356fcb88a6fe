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

/// distance based thinning of hotspot records

use firesmk_common::geo::haversine_distance;
use crate::FireHotspot;

/// drop every hotspot that lies within threshold_m meters of an already kept one, in input order.
/// This is greedy and depends on record order - the merged feed is ordered by arrival and the
/// first report of a burning pixel is the one to keep. A threshold <= 0 keeps everything since
/// distances are >= 0 and compared with strict <. Applying the filter to its own output
/// returns it unchanged.
/// O(n^2) over the record count, which stays in the tens to low hundreds for a country sized
/// region and a few day query window
pub fn filter_by_distance (hotspots: Vec<FireHotspot>, threshold_m: f64)->Vec<FireHotspot> {
    let mut kept: Vec<FireHotspot> = Vec::with_capacity( hotspots.len());

    for hs in hotspots {
        let is_close = kept.iter().any( |k| {
            haversine_distance( hs.latitude, hs.longitude, k.latitude, k.longitude) < threshold_m
        });
        if !is_close {
            kept.push( hs);
        }
    }

    kept
}
