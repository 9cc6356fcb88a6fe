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

use std::path::PathBuf;
use tokio;
use anyhow::Result;
use clap::Parser;
use firesmk_common::net::default_client;
use firesmk_firms::{load_config, get_current_hotspots, FirmsConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "retrieve current VIIRS fire hotspots for North Macedonia from the NASA FIRMS country API, as a cleaned JSON record array")]
pub struct Args {
    /// minimal hotspot separation in meters (overrides the configured value)
    #[arg(short,long)]
    pub threshold: Option<f64>,

    /// optional RON config file with feed access parameters
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// FIRMS map key used to build the feed URLs
    pub map_key: String
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt().with_writer( std::io::stderr).init(); // keep stdout for the record output

    let args = Args::parse();

    let mut config: FirmsConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => FirmsConfig::default()
    };
    if let Some(threshold) = args.threshold {
        config.distance_threshold = threshold;
    }

    let client = default_client()?;
    let hotspots = get_current_hotspots( &client, &config, &args.map_key).await?;

    println!("{}", serde_json::to_string( &hotspots)?);

    Ok(())
}
