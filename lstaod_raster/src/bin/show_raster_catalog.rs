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
use lstaod_common::{define_cli, check_cli, init_tracing};
use lstaod_raster::{DirRasterSource, GridInfo};

define_cli! { ARGS [about="list the rasters of a directory catalog collection"] =
    band: Option<String> [help="only show rasters of this band", short, long],
    data_dir: String [help="root directory of the raster catalog"],
    collection: String [help="collection (sub directory) name"]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let source = DirRasterSource::new( &ARGS.data_dir);
    let files = source.catalog( &ARGS.collection)?;

    match GridInfo::load( source.root().join( &ARGS.collection).join( lstaod_raster::dir_source::GRID_FILE)) {
        Ok(info) => println!("grid: {}, nodata: {:?}", info.grid, info.nodata),
        Err(e) => println!("no collection grid: {e}")
    }

    let mut n = 0;
    for rf in files.iter().filter( |rf| ARGS.band.as_ref().is_none_or( |b| *b == rf.band)) {
        println!("{:20} {}  {}", rf.band, rf.date, rf.path.display());
        n += 1;
    }
    println!("{n} rasters");

    Ok(())
}
