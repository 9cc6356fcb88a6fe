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

/// great circle geometry on a spherical earth of MEAN_EARTH_RADIUS.
/// Positions are plain geodetic degrees as reported by satellite hotspot products,
/// distances are meters

use crate::geo_constants::MEAN_EARTH_RADIUS;

/// haversine distance in meters between two lat/lon positions given in degrees.
/// This is symmetric, returns 0.0 for identical positions and propagates NaN inputs
pub fn haversine_distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi/2.0).sin() * (d_phi/2.0).sin()
          + phi1.cos() * phi2.cos() * (d_lambda/2.0).sin() * (d_lambda/2.0).sin();
    let c = 2.0 * a.sqrt().atan2( (1.0 - a).sqrt());

    MEAN_EARTH_RADIUS * c
}
