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

use tracing::{debug,trace};
use uom::si::{f64::Length, length::meter};

use lstaod_common::datetime::{DateRange, DateRangeSet};
use lstaod_common::geo::Region;
use lstaod_common::stats::MinMaxAvg;

use crate::observation::{Composite, ObservationSet, Variable};
use crate::errors::Result;

/// the abstraction of an image catalog that can be queried for observations of a variable within a date range
/// and region, and that knows how to reduce them temporally (into a composite) and spatially (into a scalar).
///
/// Only `query` has to be provided. The default reductions are what we use for regular lon/lat grids, remote
/// catalogs can override them if the reductions are computed server side
pub trait RasterSource {
    /// all observations of `variable` that fall into the half-open `range` and intersect `region`
    fn query (&self, variable: &Variable, range: &DateRange, region: &Region)->Result<ObservationSet>;

    /// query each sub-range of `ranges` separately and merge the results
    fn query_set (&self, variable: &Variable, ranges: &DateRangeSet, region: &Region)->Result<ObservationSet> {
        let mut set = ObservationSet::new( &variable.band);
        for range in ranges {
            let sub = self.query( variable, range, region)?;
            trace!("{} observations of {} in {}", sub.len(), variable, range);
            set.merge( sub)?;
        }
        Ok(set)
    }

    /// pixel-wise mean over all observations, ignoring missing pixels. None if the set has no data for its band
    fn temporal_mean (&self, set: &ObservationSet)->Result<Option<Composite>> {
        Composite::temporal_mean( set)
    }

    /// mean of the composite values at a regular lattice with `resolution` spacing inside of `region`.
    /// None if none of the sample points hits a valid composite cell
    fn spatial_mean (&self, composite: &Composite, region: &Region, resolution: Length)->Result<Option<f64>> {
        let points = region.sample_points( resolution);
        let acc: MinMaxAvg = points.iter().filter_map( |(lon,lat)| composite.value_at( *lon, *lat)).collect();

        debug!("spatial mean over {} of {} sample points at {}m", acc.n, points.len(), resolution.get::<meter>());
        Ok( acc.mean() )
    }
}

/// resolution in meters as uom length
pub fn meters (m: f64)->Length { Length::new::<meter>( m) }
