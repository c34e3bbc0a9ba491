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

//! descriptive post-processing of aggregate tables: column summaries, joins of two variables, period
//! climatologies and detection of consecutive anomaly exceedances (heat or pollution events).
//! Sentinel values are treated as missing data throughout

use std::{collections::BTreeMap, fmt, str::FromStr};
use chrono::{Datelike, NaiveDate};

use lstaod_common::datetime::first_of_month;
use lstaod_common::stats::{MinMaxAvg, percentile};
use crate::period::{PartitionMode, PeriodLabel, Season};
use crate::result::{AggregateRow, AggregateTable};
use crate::errors::{LstAodPeriodsError, Result, op_failed};

/* #region summaries *********************************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub n: usize,
    pub n_missing: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub std_dev: Option<f64>,
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt (v: Option<f64>)->String { v.map( |v| format!("{v:.4}")).unwrap_or_else( || "-".to_string()) }
        write!(f, "{:<24} n={:<4} missing={:<4} mean={:<10} min={:<10} max={:<10} std={}",
            self.column, self.n, self.n_missing, opt(self.mean), opt(self.min), opt(self.max), opt(self.std_dev))
    }
}

/// count, mean, min, max and sample standard deviation of the table values
pub fn summarize (table: &AggregateTable)->ColumnSummary {
    let mut acc = MinMaxAvg::new();
    for row in &table.rows {
        match row.valid_value() {
            Some(v) => acc.add(v),
            None => acc.add_missing()
        }
    }

    let has_data = !acc.is_empty();
    ColumnSummary {
        column: table.value_column(),
        n: acc.n,
        n_missing: acc.n_missing,
        mean: acc.mean(),
        min: if has_data { Some(acc.min) } else { None },
        max: if has_data { Some(acc.max) } else { None },
        std_dev: acc.std_dev(),
    }
}

/// mean value per period label across all years, in period order. Labels without valid values are omitted
pub fn climatology (table: &AggregateTable)->Vec<(PeriodLabel,f64)> {
    let mut accs: BTreeMap<PeriodLabel,MinMaxAvg> = BTreeMap::new();
    for row in &table.rows {
        if let Some(v) = row.valid_value() {
            accs.entry( row.label()).or_default().add( v);
        }
    }
    accs.into_iter().filter_map( |(label,acc)| acc.mean().map( |m| (label,m))).collect()
}

/* #endregion summaries */

/* #region joins *************************************************************************************************/

/// a row of two tables with matching (year,period). Missing values are None
#[derive(Debug,Clone,PartialEq)]
pub struct JoinedRow {
    pub year: i32,
    pub period: PeriodLabel,
    pub a: Option<f64>,
    pub b: Option<f64>,
}

/// inner join of two tables of the same partition mode on (year,period), in the order of `a`
pub fn join_tables (a: &AggregateTable, b: &AggregateTable)->Result<Vec<JoinedRow>> {
    if a.mode != b.mode {
        return Err( op_failed!("cannot join {} table {} with {} table {}", a.mode, a.variable, b.mode, b.variable))
    }

    let b_rows: BTreeMap<(i32,PeriodLabel),&AggregateRow> = b.rows.iter().map( |r| ((r.year, r.label()), r)).collect();

    Ok( a.rows.iter().filter_map( |ra| {
        b_rows.get( &(ra.year, ra.label())).map( |rb| {
            JoinedRow { year: ra.year, period: ra.label(), a: ra.valid_value(), b: rb.valid_value() }
        })
    }).collect() )
}

/* #endregion joins */

/* #region events ************************************************************************************************/

/// how anomaly exceedances are determined
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum ThresholdMethod {
    /// anomaly strictly above the given percentile (0..100) of all anomalies
    Percentile(f64),
    /// standardized anomaly strictly above the given z value
    ZScore(f64),
}

impl FromStr for ThresholdMethod {
    type Err = LstAodPeriodsError;

    /// "percentile:<p>" or "zscore:<z>"
    fn from_str (s: &str)->Result<Self> {
        let (kind, val) = s.split_once(':').ok_or_else( || op_failed!("threshold method not in <kind>:<value> format: '{}'", s))?;
        let val: f64 = val.trim().parse().map_err( |_| op_failed!("invalid threshold value in '{}'", s))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "percentile" | "pct" => {
                if !(0.0..=100.0).contains( &val) { return Err( op_failed!("percentile out of range: {}", val)) }
                Ok( ThresholdMethod::Percentile(val) )
            }
            "zscore" | "z" => Ok( ThresholdMethod::ZScore(val) ),
            _ => Err( op_failed!("unknown threshold method '{}'", kind))
        }
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdMethod::Percentile(p) => write!(f, "percentile:{p}"),
            ThresholdMethod::ZScore(z) => write!(f, "zscore:{z}"),
        }
    }
}

/// a run of consecutive exceeding values
#[derive(Debug,Clone,PartialEq)]
pub struct Event {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// number of calendar months from start to end month, inclusive
    pub duration_months: u32,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} ({} months)", self.start.format("%Y-%m"), self.end.format("%Y-%m"), self.duration_months)
    }
}

/// the (date,value) series of a table without sentinel rows. Dates are the start of the bucket
/// (first of month, Nov 1 / Apr 1 for dry / wet seasons, Jan 1 for years)
pub fn table_series (table: &AggregateTable)->Vec<(NaiveDate,f64)> {
    table.rows.iter().filter_map( |r| {
        let month = match r.label() {
            PeriodLabel::Month(m) => m,
            PeriodLabel::Season(Season::Dry) => 11,
            PeriodLabel::Season(Season::Wet) => 4,
            PeriodLabel::Annual => 1,
        };
        let date = first_of_month( r.year, month)?;
        r.valid_value().map( |v| (date,v))
    }).collect()
}

/// deviations from the series mean
pub fn anomalies (values: &[f64])->Vec<f64> {
    let acc: MinMaxAvg = values.iter().copied().collect();
    match acc.mean() {
        Some(mean) => values.iter().map( |v| v - mean).collect(),
        None => values.to_vec()
    }
}

/// anomalies divided by the sample standard deviation. All NaN if the standard deviation is undefined or zero
pub fn standardized_anomalies (values: &[f64])->Vec<f64> {
    let anom = anomalies( values);
    let acc: MinMaxAvg = anom.iter().copied().collect();
    match acc.std_dev() {
        Some(sd) if sd > 0.0 => anom.iter().map( |a| a / sd).collect(),
        _ => vec![ f64::NAN; anom.len() ]
    }
}

fn month_diff (start: &NaiveDate, end: &NaiveDate)->i32 {
    (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32
}

fn months_between (start: &NaiveDate, end: &NaiveDate)->u32 {
    (month_diff( start, end).max(0) + 1) as u32
}

/// the largest step in months between consecutive buckets of a complete series of the given mode
/// (Apr 1 to Nov 1 for seasons)
pub fn max_step_months (mode: PartitionMode)->u32 {
    match mode {
        PartitionMode::Monthly => 1,
        PartitionMode::Seasonal => 7,
        PartitionMode::Yearly => 12,
    }
}

/// exceedance mask of the series anomalies for the given method
pub fn exceedance_mask (values: &[f64], method: ThresholdMethod)->Vec<bool> {
    match method {
        ThresholdMethod::Percentile(p) => {
            let anom = anomalies( values);
            match percentile( &anom, p) {
                Some(threshold) => anom.iter().map( |a| *a > threshold).collect(),
                None => vec![ false; anom.len() ]
            }
        }
        ThresholdMethod::ZScore(z) => standardized_anomalies( values).iter().map( |a| *a > z).collect()
    }
}

/// detect runs of consecutive exceedances in a chronologically ordered series. Runs shorter than `min_duration`
/// months are dropped, a run that is still open at the end of the series ends at the last date.
/// Series from [`table_series`] have no entries for missing buckets, so a run is also split where consecutive
/// dates are more than `max_step` months apart (see [`max_step_months`])
pub fn detect_events (series: &[(NaiveDate,f64)], method: ThresholdMethod, min_duration: u32, max_step: u32)->Vec<Event> {
    let values: Vec<f64> = series.iter().map( |(_,v)| *v).collect();
    let mask = exceedance_mask( &values, method);

    let mut events = Vec::new();
    let mut start: Option<usize> = None;

    let close = |s: usize, e: usize, events: &mut Vec<Event>| {
        let (start, end) = (series[s].0, series[e].0);
        let duration_months = months_between( &start, &end);
        if duration_months >= min_duration {
            events.push( Event { start, end, duration_months });
        }
    };

    for (i, exceeds) in mask.iter().enumerate() {
        match (start, *exceeds) {
            (None, true) => start = Some(i),
            (Some(s), true) => {
                if month_diff( &series[i-1].0, &series[i].0) > max_step as i32 {
                    close( s, i-1, &mut events);
                    start = Some(i);
                }
            }
            (Some(s), false) => {
                close( s, i-1, &mut events);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        close( s, series.len()-1, &mut events);
    }

    events
}

/* #endregion events */
