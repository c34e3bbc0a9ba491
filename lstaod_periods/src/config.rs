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

use std::path::PathBuf;
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::meter};

use lstaod_common::geo::Region;
use lstaod_raster::{UnitTransform, Variable};
use crate::aggregator::AggregationRequest;
use crate::period::PartitionMode;
use crate::errors::{LstAodPeriodsError, Result};

/// one variable to aggregate
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct VariableConfig {
    /// collection (catalog directory) of the variable
    pub name: String,
    /// short label used in output file names, e.g. "LST"
    pub label: String,
    /// value column name without the `Mean_` prefix, e.g. "LST_Celsius"
    pub column: String,
    pub band: String,
    #[serde(default)]
    pub transform: UnitTransform,
    pub modes: Vec<PartitionMode>,
}

impl VariableConfig {
    pub fn variable (&self)->Variable { Variable::new( &self.name, &self.band) }
}

/// the configuration of an aggregation run over all configured variables and modes
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AggregationConfig {
    /// GeoJSON file with the region boundary
    pub region_file: PathBuf,
    /// root of the raster catalog
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// prefix of output file names, e.g. "Lagos"
    pub output_prefix: String,
    pub year_start: i32,
    pub year_end: i32,
    /// spatial reduction resolution in meters
    pub resolution_m: f64,
    #[serde(default)]
    pub export_composites: bool,
    pub variables: Vec<VariableConfig>,
}

impl AggregationConfig {
    pub fn resolution (&self)->Length { Length::new::<meter>( self.resolution_m) }

    /// `<prefix>_<Mode>_<label>_<year_start>_<year_end>`, e.g. "Lagos_Monthly_LST_2017_2025"
    pub fn output_name (&self, var: &VariableConfig, mode: PartitionMode)->String {
        format!("{}_{}_{}_{}_{}", self.output_prefix, mode, var.label, self.year_start, self.year_end)
    }

    pub fn request<'a> (&self, var: &VariableConfig, mode: PartitionMode, region: &'a Region)->AggregationRequest<'a> {
        AggregationRequest::new( var.variable(), &var.column, region, self.year_start, self.year_end, mode)
            .with_transform( var.transform)
            .with_resolution( self.resolution())
    }

    /// check value ranges that would otherwise only fail at the end of a run
    pub fn validate (&self)->Result<()> {
        if self.year_start > self.year_end {
            return Err( LstAodPeriodsError::InvalidRange { start: self.year_start, end: self.year_end })
        }
        if !(self.resolution_m > 0.0) {
            return Err( LstAodPeriodsError::OpFailedError( format!("invalid resolution {}", self.resolution_m)))
        }
        Ok(())
    }
}

impl Default for AggregationConfig {
    fn default()->Self {
        let all_modes = PartitionMode::ALL.to_vec();
        AggregationConfig {
            region_file: PathBuf::from("Lagos_Boundary.geojson"),
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            output_prefix: "Lagos".to_string(),
            year_start: 2017,
            year_end: 2025,
            resolution_m: 1000.0,
            export_composites: false,
            variables: vec![
                VariableConfig {
                    name: "MODIS/061/MOD11A2".to_string(),
                    label: "LST".to_string(),
                    column: "LST_Celsius".to_string(),
                    band: "LST_Day_1km".to_string(),
                    transform: UnitTransform::MODIS_LST_CELSIUS,
                    modes: all_modes.clone(),
                },
                VariableConfig {
                    name: "MODIS/061/MCD19A2_GRANULES".to_string(),
                    label: "AOD".to_string(),
                    column: "AOD".to_string(),
                    band: "Optical_Depth_047".to_string(),
                    transform: UnitTransform::MAIAC_AOD,
                    modes: all_modes,
                },
            ]
        }
    }
}
