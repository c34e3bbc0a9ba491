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

use std::{collections::BTreeMap, fmt, sync::Arc};
use chrono::{DateTime, Utc};
use ndarray::{Array2, Zip};
use serde::{Serialize,Deserialize};

use lstaod_common::datetime::Dated;
use crate::grid::GridGeometry;
use crate::errors::{LstAodRasterError, Result};

/// identifies a gridded variable as the band of an image collection, e.g. `MODIS/061/MOD11A2:LST_Day_1km`
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct Variable {
    pub collection: String,
    pub band: String,
}

impl Variable {
    pub fn new (collection: impl ToString, band: impl ToString)->Self {
        Variable { collection: collection.to_string(), band: band.to_string() }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.band)
    }
}

/* #region Observation *******************************************************************************************/

/// a single gridded measurement at one timestamp with one or more named bands. Missing pixels are NaN.
/// Band data is shared so that cloning observations (e.g. to apply unit transforms) is cheap until a band changes
#[derive(Debug,Clone)]
pub struct Observation {
    pub date: DateTime<Utc>,
    pub grid: GridGeometry,
    bands: BTreeMap<String,Arc<Array2<f64>>>,
}

impl Observation {
    pub fn new (date: DateTime<Utc>, grid: GridGeometry)->Self {
        Observation { date, grid, bands: BTreeMap::new() }
    }

    /// builder style band setter. Fails if the array shape does not match the grid
    pub fn with_band (mut self, name: impl ToString, values: Array2<f64>)->Result<Self> {
        self.set_band( name, values)?;
        Ok(self)
    }

    pub fn set_band (&mut self, name: impl ToString, values: Array2<f64>)->Result<()> {
        if values.dim() != self.grid.shape() {
            return Err( LstAodRasterError::GridMismatch(
                format!("band {} has shape {:?}, grid is {:?}", name.to_string(), values.dim(), self.grid.shape())))
        }
        self.bands.insert( name.to_string(), Arc::new(values));
        Ok(())
    }

    pub fn band (&self, name: &str)->Option<&Array2<f64>> {
        self.bands.get(name).map( |a| a.as_ref())
    }

    /// a copy of this observation with `f` applied to every pixel of the named band. Other bands are shared
    pub fn map_band<F> (&self, name: &str, f: F)->Self where F: Fn(f64)->f64 {
        let mut bands = self.bands.clone();
        if let Some(a) = self.bands.get(name) {
            bands.insert( name.to_string(), Arc::new( a.mapv( |x| f(x))));
        }
        Observation { date: self.date, grid: self.grid, bands }
    }
}

impl Dated for Observation {
    fn date (&self)->DateTime<Utc> { self.date }
}

/* #endregion Observation */

/* #region ObservationSet ****************************************************************************************/

/// the observations of a query result, together with the band name that is subject to aggregation.
/// Observations are kept in chronological order
#[derive(Debug,Clone)]
pub struct ObservationSet {
    pub band: String,
    observations: Vec<Observation>,
}

impl ObservationSet {
    pub fn new (band: impl ToString)->Self {
        ObservationSet { band: band.to_string(), observations: Vec::new() }
    }

    pub fn from_observations (band: impl ToString, mut observations: Vec<Observation>)->Self {
        observations.sort_by_key( |o| o.date);
        ObservationSet { band: band.to_string(), observations }
    }

    #[inline] pub fn len (&self)->usize { self.observations.len() }
    #[inline] pub fn is_empty (&self)->bool { self.observations.is_empty() }
    #[inline] pub fn observations (&self)->&[Observation] { &self.observations }

    pub fn push (&mut self, obs: Observation) {
        let idx = self.observations.partition_point( |o| o.date <= obs.date);
        self.observations.insert( idx, obs);
    }

    /// add all observations of another set. Sets have to refer to the same band
    pub fn merge (&mut self, other: ObservationSet)->Result<()> {
        if other.band != self.band {
            return Err( LstAodRasterError::OpFailedError( format!("cannot merge band {} into {}", other.band, self.band)))
        }
        for obs in other.observations {
            self.push( obs);
        }
        Ok(())
    }

    /// the band arrays of all observations that have the set band
    pub fn band_values (&self)->impl Iterator<Item=(&Observation,&Array2<f64>)> {
        self.observations.iter().filter_map( |o| o.band( &self.band).map( |a| (o,a)))
    }

    /// new set with a pure numeric function applied to the aggregation band of each observation
    pub fn map_band<F> (&self, f: F)->ObservationSet where F: Fn(f64)->f64 {
        let observations = self.observations.iter().map( |o| o.map_band( &self.band, &f)).collect();
        ObservationSet { band: self.band.clone(), observations }
    }
}

/* #endregion ObservationSet */

/* #region Composite *********************************************************************************************/

/// a single grid derived by reducing multiple observations pixel-wise. `counts` holds the number of valid
/// inputs per pixel, `values` is NaN where the count is zero
#[derive(Debug,Clone)]
pub struct Composite {
    pub grid: GridGeometry,
    pub values: Array2<f64>,
    pub counts: Array2<u32>,
}

impl Composite {
    /// pixel-wise mean of all finite values. Returns None if there is no observation for the band.
    /// All observations have to share the same grid
    pub fn temporal_mean (set: &ObservationSet)->Result<Option<Composite>> {
        let mut it = set.band_values();

        let (first_obs, first) = match it.next() {
            Some(v) => v,
            None => return Ok(None)
        };
        let grid = first_obs.grid;

        let mut sums: Array2<f64> = Array2::zeros( grid.shape());
        let mut counts: Array2<u32> = Array2::zeros( grid.shape());
        accumulate( &mut sums, &mut counts, first);

        for (obs,a) in it {
            if !obs.grid.is_compatible( &grid) {
                return Err( LstAodRasterError::GridMismatch( format!("observation {} has grid {}, expected {}", obs.date, obs.grid, grid)))
            }
            accumulate( &mut sums, &mut counts, a);
        }

        let mut values = sums;
        Zip::from( &mut values).and( &counts).for_each( |v, &n| {
            *v = if n > 0 { *v / n as f64 } else { f64::NAN };
        });

        Ok( Some( Composite { grid, values, counts }) )
    }

    /// value of the cell that contains the given position, None if outside of the grid or not finite
    pub fn value_at (&self, lon: f64, lat: f64)->Option<f64> {
        self.grid.cell_of( lon, lat)
            .map( |(row,col)| self.values[[row,col]])
            .filter( |v| v.is_finite())
    }

    pub fn n_valid_pixels (&self)->usize {
        self.counts.iter().filter( |&&n| n > 0).count()
    }
}

fn accumulate (sums: &mut Array2<f64>, counts: &mut Array2<u32>, a: &Array2<f64>) {
    Zip::from( sums).and( counts).and( a).for_each( |s, n, &x| {
        if x.is_finite() {
            *s += x;
            *n += 1;
        }
    });
}

/* #endregion Composite */
