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
use crate::period::{PartitionMode, PeriodLabel};

/// the value that marks a bucket without data in all result tables
pub const SENTINEL: f64 = -9999.0;

#[inline]
pub fn is_sentinel (v: f64)->bool { v == SENTINEL }

/// one row of an aggregation result. `period` is None for yearly aggregates
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AggregateRow {
    pub year: i32,
    pub period: Option<PeriodLabel>,
    pub value: f64,
    pub n_observations: usize,
}

impl AggregateRow {
    pub fn new (year: i32, label: PeriodLabel, value: f64, n_observations: usize)->Self {
        let period = if label == PeriodLabel::Annual { None } else { Some(label) };
        AggregateRow { year, period, value, n_observations }
    }

    pub fn sentinel (year: i32, label: PeriodLabel, n_observations: usize)->Self {
        AggregateRow::new( year, label, SENTINEL, n_observations)
    }

    pub fn is_sentinel (&self)->bool { is_sentinel( self.value) }

    pub fn label (&self)->PeriodLabel { self.period.unwrap_or( PeriodLabel::Annual) }

    /// the value or None if this is a sentinel row
    pub fn valid_value (&self)->Option<f64> { if self.is_sentinel() { None } else { Some(self.value) } }
}

impl fmt::Display for AggregateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period {
            Some(p) => write!(f, "{} {:>10} {}", self.year, p.to_string(), self.value),
            None => write!(f, "{} {}", self.year, self.value)
        }
    }
}

/// the ordered rows of aggregating one variable in one partition mode. `variable` is the value column name
/// without the `Mean_` prefix, e.g. "LST_Celsius"
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AggregateTable {
    pub variable: String,
    pub mode: PartitionMode,
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    pub fn new (variable: impl ToString, mode: PartitionMode)->Self {
        AggregateTable { variable: variable.to_string(), mode, rows: Vec::new() }
    }

    pub fn value_column (&self)->String { format!("Mean_{}", self.variable) }

    #[inline] pub fn len (&self)->usize { self.rows.len() }
    #[inline] pub fn is_empty (&self)->bool { self.rows.is_empty() }

    pub fn values (&self)->impl Iterator<Item=f64> + '_ { self.rows.iter().map( |r| r.value) }

    pub fn n_sentinels (&self)->usize { self.rows.iter().filter( |r| r.is_sentinel()).count() }

    pub fn get (&self, year: i32, label: PeriodLabel)->Option<&AggregateRow> {
        self.rows.iter().find( |r| r.year == year && r.label() == label)
    }
}
