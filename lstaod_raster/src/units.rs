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

use std::fmt;
use serde::{Serialize,Deserialize};
use uom::si::f64::ThermodynamicTemperature;
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

/// pure per-pixel conversion from stored raster values into physical units, applied to each observation
/// before temporal aggregation. Non-finite values (missing data) stay non-finite
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize,Default)]
pub enum UnitTransform {
    #[default]
    Identity,

    /// `x * scale + offset`, e.g. MODIS LST `(0.02, -273.15)` or MAIAC AOD `(0.001, 0.0)`
    Linear { scale: f64, offset: f64 },

    /// scaled integer Kelvin values into degrees Celsius
    ScaledKelvinToCelsius { scale: f64 },
}

impl UnitTransform {
    /// the MODIS MOD11A2 LST_Day_1km conversion into degrees Celsius
    pub const MODIS_LST_CELSIUS: UnitTransform = UnitTransform::Linear { scale: 0.02, offset: -273.15 };

    /// the MCD19A2 Optical_Depth_047 scale factor
    pub const MAIAC_AOD: UnitTransform = UnitTransform::Linear { scale: 0.001, offset: 0.0 };

    #[inline]
    pub fn apply (&self, x: f64)->f64 {
        if !x.is_finite() { return f64::NAN }

        match self {
            UnitTransform::Identity => x,
            UnitTransform::Linear { scale, offset } => x * scale + offset,
            UnitTransform::ScaledKelvinToCelsius { scale } => {
                ThermodynamicTemperature::new::<kelvin>( x * scale).get::<degree_celsius>()
            }
        }
    }

    pub fn is_identity (&self)->bool { matches!( self, UnitTransform::Identity) }
}

impl fmt::Display for UnitTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitTransform::Identity => write!(f, "x"),
            UnitTransform::Linear { scale, offset } => write!(f, "x·{scale} + {offset}"),
            UnitTransform::ScaledKelvinToCelsius { scale } => write!(f, "K(x·{scale}) -> °C"),
        }
    }
}
