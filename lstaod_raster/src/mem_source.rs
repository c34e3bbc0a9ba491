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

use std::collections::HashMap;
use tracing::trace;

use lstaod_common::datetime::DateRange;
use lstaod_common::geo::Region;

use crate::source::RasterSource;
use crate::observation::{Observation, ObservationSet, Variable};
use crate::errors::{LstAodRasterError, Result};

/// an in-memory catalog of observations per variable. Used to run aggregations on synthetic or pre-loaded data
#[derive(Debug,Default)]
pub struct MemRasterSource {
    catalog: HashMap<Variable,Vec<Observation>>,
}

impl MemRasterSource {
    pub fn new ()->Self { MemRasterSource::default() }

    /// register a variable without observations
    pub fn add_variable (&mut self, variable: Variable) {
        self.catalog.entry( variable).or_default();
    }

    pub fn add_observation (&mut self, variable: &Variable, obs: Observation) {
        let list = self.catalog.entry( variable.clone()).or_default();
        let idx = list.partition_point( |o| o.date <= obs.date);
        list.insert( idx, obs);
    }

    pub fn with_observations (mut self, variable: &Variable, obs: impl IntoIterator<Item=Observation>)->Self {
        self.add_variable( variable.clone());
        for o in obs { self.add_observation( variable, o) }
        self
    }

    pub fn variables (&self)->impl Iterator<Item=&Variable> { self.catalog.keys() }

    pub fn n_observations (&self, variable: &Variable)->usize {
        self.catalog.get( variable).map( |l| l.len()).unwrap_or(0)
    }
}

impl RasterSource for MemRasterSource {
    fn query (&self, variable: &Variable, range: &DateRange, region: &Region)->Result<ObservationSet> {
        let list = self.catalog.get( variable).ok_or_else( || LstAodRasterError::NoSuchVariable( variable.to_string()))?;

        let observations: Vec<Observation> = list.iter()
            .filter( |o| range.contains( *o) && region.intersects_rect( &o.grid.bounds()))
            .cloned()
            .collect();
        trace!("mem query {} {} -> {}", variable, range, observations.len());

        Ok( ObservationSet::from_observations( &variable.band, observations) )
    }
}
