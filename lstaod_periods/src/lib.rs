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

#![allow(unused)]

//! period mean aggregation of gridded variables such as land surface temperature (LST) or aerosol optical
//! depth (AOD) over a fixed region. Each (year,period) bucket of a monthly, seasonal or yearly partition is
//! reduced temporally into a composite and spatially into a single mean. Buckets without data get the
//! [`SENTINEL`] value, which keeps result tables dense and aligned across variables

pub mod errors;
pub mod period;
pub mod result;
pub mod aggregator;
pub mod sink;
pub mod analysis;
pub mod config;

pub use errors::{LstAodPeriodsError, Result};
pub use period::{PartitionMode, Season, PeriodLabel, PeriodBucket, bucket_ranges, enumerate_buckets, count_buckets};
pub use result::{SENTINEL, AggregateRow, AggregateTable};
pub use aggregator::{AggregationRequest, BucketResult, aggregate, aggregate_with_composites};
pub use sink::{ResultSink, CsvTableSink, MemTableSink, read_table};
pub use config::{AggregationConfig, VariableConfig};

use std::path::Path;
use tracing::info;
use lstaod_common::geo::Region;
use lstaod_raster::{RasterSource, write_composite_tiff};

/// aggregate all configured variables in all of their modes (restricted to `modes` if not empty) and write the
/// results to `sink`. Composites are exported into `config.output_dir` if `config.export_composites` is set.
/// Returns the names of the written tables
pub fn run_aggregations<S,K> (config: &AggregationConfig, source: &S, region: &Region, modes: &[PartitionMode], sink: &mut K)->Result<Vec<String>>
    where S: RasterSource + ?Sized, K: ResultSink
{
    config.validate()?;

    let mut names = Vec::new();
    for var in &config.variables {
        for mode in var.modes.iter().filter( |m| modes.is_empty() || modes.contains(m)) {
            let req = config.request( var, *mode, region);
            let name = config.output_name( var, *mode);

            let table = if config.export_composites {
                let results = aggregate_with_composites( source, &req)?;
                export_composites( &config.output_dir, &name, &results)?;
                let mut table = AggregateTable::new( &req.column, req.mode);
                table.rows = results.into_iter().map( |r| r.row).collect();
                table
            } else {
                aggregate( source, &req)?
            };

            info!("{name}: {} rows, {} without data", table.len(), table.n_sentinels());
            sink.write_table( &name, &table)?;
            names.push( name);
        }
    }
    Ok(names)
}

/// write the non-empty composites of an aggregation as `<dir>/<name>_<YYYYMMDD>.tif`, dated by the first day of
/// their bucket. This is the `DirRasterSource` file layout, i.e. `dir` can be read back as a catalog collection
/// with `name` as the band
pub fn export_composites (dir: &Path, name: &str, results: &[BucketResult])->Result<usize> {
    lstaod_common::fs::ensure_writable_dir( dir)?;

    let mut n = 0;
    for r in results {
        if let (Some(composite), Some(span)) = (&r.composite, r.bucket.ranges.span()) {
            let fname = format!("{name}_{}.tif", span.start.format("%Y%m%d"));
            write_composite_tiff( dir.join( fname), composite)?;
            n += 1;
        }
    }
    Ok(n)
}
