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

use tracing::{debug,info};
use uom::si::{f64::Length, length::meter};

use lstaod_common::geo::Region;
use lstaod_raster::{Composite, ObservationSet, RasterSource, UnitTransform, Variable};

use crate::period::{PartitionMode, PeriodBucket, enumerate_buckets};
use crate::result::{AggregateRow, AggregateTable};
use crate::errors::Result;

/// the parameters of aggregating one variable over a region for an inclusive year range
#[derive(Debug,Clone)]
pub struct AggregationRequest<'a> {
    pub variable: Variable,
    /// value column name without the `Mean_` prefix
    pub column: String,
    pub region: &'a Region,
    pub year_start: i32,
    pub year_end: i32,
    pub mode: PartitionMode,
    pub transform: UnitTransform,
    pub resolution: Length,
}

impl<'a> AggregationRequest<'a> {
    pub fn new (variable: Variable, column: impl ToString, region: &'a Region, year_start: i32, year_end: i32, mode: PartitionMode)->Self {
        AggregationRequest {
            variable,
            column: column.to_string(),
            region,
            year_start,
            year_end,
            mode,
            transform: UnitTransform::Identity,
            resolution: Length::new::<meter>(1000.0)
        }
    }

    pub fn with_transform (mut self, transform: UnitTransform)->Self {
        self.transform = transform;
        self
    }

    pub fn with_resolution (mut self, resolution: Length)->Self {
        self.resolution = resolution;
        self
    }
}

/// the per-bucket result of an aggregation, including the composite the value was computed from
#[derive(Debug,Clone)]
pub struct BucketResult {
    pub bucket: PeriodBucket,
    pub row: AggregateRow,
    pub composite: Option<Composite>,
}

/// compute one mean per (year,period) bucket. Buckets without observations or without any valid pixel inside
/// of the region get the sentinel value. Rows are in bucket enumeration order
pub fn aggregate<S> (source: &S, req: &AggregationRequest)->Result<AggregateTable> where S: RasterSource + ?Sized {
    let results = aggregate_with_composites( source, req)?;

    let mut table = AggregateTable::new( &req.column, req.mode);
    table.rows = results.into_iter().map( |r| r.row).collect();
    Ok(table)
}

/// like [`aggregate`] but also returns the bucket definitions and temporal composites
pub fn aggregate_with_composites<S> (source: &S, req: &AggregationRequest)->Result<Vec<BucketResult>> where S: RasterSource + ?Sized {
    let buckets = enumerate_buckets( req.year_start, req.year_end, req.mode)?;
    info!("aggregating {} {} over {} for {}-{} ({} buckets)",
          req.mode, req.variable, req.region.name(), req.year_start, req.year_end, buckets.len());

    let mut results = Vec::with_capacity( buckets.len());
    for bucket in buckets {
        let (row, composite) = aggregate_bucket( source, req, &bucket)?;
        debug!("{bucket} -> {} ({} observations)", row.value, row.n_observations);
        results.push( BucketResult { bucket, row, composite });
    }

    Ok(results)
}

fn aggregate_bucket<S> (source: &S, req: &AggregationRequest, bucket: &PeriodBucket)->Result<(AggregateRow,Option<Composite>)>
    where S: RasterSource + ?Sized
{
    let raw = source.query_set( &req.variable, &bucket.ranges, req.region)?;
    let n_obs = raw.len();
    if raw.is_empty() {
        debug!("{bucket}: no observations");
        return Ok( (AggregateRow::sentinel( bucket.year, bucket.label, 0), None) )
    }

    let set: ObservationSet = if req.transform.is_identity() { raw } else { raw.map_band( |x| req.transform.apply(x)) };

    let composite = match source.temporal_mean( &set)? {
        Some(c) => c,
        None => {
            debug!("{bucket}: no band data in {n_obs} observations");
            return Ok( (AggregateRow::sentinel( bucket.year, bucket.label, n_obs), None) )
        }
    };

    match source.spatial_mean( &composite, req.region, req.resolution)? {
        Some(v) => Ok( (AggregateRow::new( bucket.year, bucket.label, v, n_obs), Some(composite)) ),
        None => {
            debug!("{bucket}: empty spatial reduction over {}", req.region.name());
            Ok( (AggregateRow::sentinel( bucket.year, bucket.label, n_obs), Some(composite)) )
        }
    }
}
