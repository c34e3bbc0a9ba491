/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use anyhow::Result;
use tracing::info;
use lstaod_common::{define_cli, check_cli, init_tracing, config::{load_config, config_to_string}, geo::Region};
use lstaod_raster::DirRasterSource;
use lstaod_periods::{AggregationConfig, CsvTableSink, PartitionMode, run_aggregations};

define_cli! { ARGS [about="compute monthly, seasonal and yearly region means of gridded LST/AOD data"] =
    config: Option<String> [help="filename of AggregationConfig (RON)", short, long],
    template: bool [help="print the default config and exit", long],
    mode: Vec<String> [help="only run the given partition modes (monthly|seasonal|yearly)", short, long]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    if ARGS.template {
        if let Some(s) = config_to_string( &AggregationConfig::default()) { println!("{s}") }
        return Ok(())
    }

    let config: AggregationConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => {
            info!("no config given, using defaults");
            AggregationConfig::default()
        }
    };
    let modes = ARGS.mode.iter().map( |m| m.parse::<PartitionMode>()).collect::<lstaod_periods::Result<Vec<_>>>()?;

    let region = Region::load_geojson( &config.region_file)?;
    info!("region {region}");

    let source = DirRasterSource::new( &config.data_dir);
    let mut sink = CsvTableSink::new( &config.output_dir)?;

    let names = run_aggregations( &config, &source, &region, &modes, &mut sink)?;
    for name in &names {
        println!("{}", sink.path_for( name).display());
    }

    Ok(())
}
