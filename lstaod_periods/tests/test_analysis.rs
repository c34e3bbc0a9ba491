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

use chrono::NaiveDate;
use lstaod_periods::*;
use lstaod_periods::analysis::*;

// run with "cargo test test_xx -- --nocapture"

fn ymd (y: i32, m: u32, d: u32)->NaiveDate { NaiveDate::from_ymd_opt(y,m,d).unwrap() }

fn monthly (variable: &str, year: i32, values: &[f64])->AggregateTable {
    let mut table = AggregateTable::new( variable, PartitionMode::Monthly);
    for (i,v) in values.iter().enumerate() {
        table.rows.push( AggregateRow::new( year, PeriodLabel::Month( i as u32 + 1), *v, 1));
    }
    table
}

#[test]
fn test_summarize_skips_sentinels () {
    let table = monthly( "LST_Celsius", 2020, &[2.0, 4.0, SENTINEL, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let s = summarize( &table);
    println!("{s}");

    assert_eq!( s.column, "Mean_LST_Celsius");
    assert_eq!( s.n, 8);
    assert_eq!( s.n_missing, 1);
    assert_eq!( s.min, Some(2.0));
    assert_eq!( s.max, Some(9.0));
    assert!( (s.mean.unwrap() - 5.0).abs() < 1e-12);
    assert!( (s.std_dev.unwrap() - 2.138089935299395).abs() < 1e-12);

    let empty = summarize( &monthly( "AOD", 2020, &[SENTINEL, SENTINEL]));
    assert_eq!( (empty.n, empty.mean, empty.min), (0, None, None));
}

#[test]
fn test_climatology () {
    let mut table = monthly( "AOD", 2019, &[1.0, 2.0, 3.0]);
    table.rows.extend( monthly( "AOD", 2020, &[3.0, SENTINEL, 5.0]).rows);

    let clim = climatology( &table);
    assert_eq!( clim, vec![
        (PeriodLabel::Month(1), 2.0),
        (PeriodLabel::Month(2), 2.0),
        (PeriodLabel::Month(3), 4.0),
    ]);
}

#[test]
fn test_join () {
    let lst = monthly( "LST_Celsius", 2020, &[30.0, 31.0, 32.0]);
    let aod = monthly( "AOD", 2020, &[0.5, SENTINEL]);

    let rows = join_tables( &lst, &aod).unwrap();
    assert_eq!( rows.len(), 2);
    assert_eq!( rows[0], JoinedRow { year: 2020, period: PeriodLabel::Month(1), a: Some(30.0), b: Some(0.5) });
    assert_eq!( rows[1].b, None);

    let yearly = AggregateTable::new( "AOD", PartitionMode::Yearly);
    assert!( join_tables( &lst, &yearly).is_err());
}

#[test]
fn test_threshold_method_parsing () {
    assert_eq!( "percentile:90".parse::<ThresholdMethod>().unwrap(), ThresholdMethod::Percentile(90.0));
    assert_eq!( "zscore:1.5".parse::<ThresholdMethod>().unwrap(), ThresholdMethod::ZScore(1.5));
    assert!( "percentile:190".parse::<ThresholdMethod>().is_err());
    assert!( "median".parse::<ThresholdMethod>().is_err());
}

#[test]
fn test_detect_events () {
    // monthly series Jan 2020 .. Dec 2020 with a 3 month hot spell, a single hot month and an open spell at the end
    let values = [0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0, 10.0];
    let series: Vec<(NaiveDate,f64)> = values.iter().enumerate().map( |(i,v)| (ymd( 2020, i as u32 + 1, 1), *v)).collect();

    // zscore: mean 5, anomalies +-5, sample std ~5.22 -> exceedance at z > 0.5
    let events = detect_events( &series, ThresholdMethod::ZScore(0.5), 2, 1);
    for e in &events { println!("{e}") }
    assert_eq!( events, vec![
        Event { start: ymd(2020,3,1), end: ymd(2020,5,1), duration_months: 3 },
        Event { start: ymd(2020,11,1), end: ymd(2020,12,1), duration_months: 2 },
    ]);

    // single month events are kept with min_duration 1
    assert_eq!( detect_events( &series, ThresholdMethod::ZScore(0.5), 1, 1).len(), 3);

    // strict '>' of the percentile: the 90th percentile of anomalies is +5 so nothing exceeds it
    assert!( detect_events( &series, ThresholdMethod::Percentile(90.0), 1, 1).is_empty());
    assert_eq!( detect_events( &series, ThresholdMethod::Percentile(10.0), 2, 1).len(), 2);
}

#[test]
fn test_events_split_at_missing_months () {
    // hot spell Jan..May 2020 with no data for March
    let table = monthly( "LST_Celsius", 2020, &[10.0, 10.0, SENTINEL, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let series = table_series( &table);
    assert_eq!( series.len(), 11);

    let events = detect_events( &series, ThresholdMethod::ZScore(0.5), 2, max_step_months( table.mode));
    for e in &events { println!("{e}") }
    assert_eq!( events, vec![
        Event { start: ymd(2020,1,1), end: ymd(2020,2,1), duration_months: 2 },
        Event { start: ymd(2020,4,1), end: ymd(2020,5,1), duration_months: 2 },
    ]);

    // a step that tolerates the gap joins both runs
    let joined = detect_events( &series, ThresholdMethod::ZScore(0.5), 2, 2);
    assert_eq!( joined, vec![ Event { start: ymd(2020,1,1), end: ymd(2020,5,1), duration_months: 5 } ]);
}

#[test]
fn test_table_series () {
    let mut table = AggregateTable::new( "AOD", PartitionMode::Seasonal);
    table.rows.push( AggregateRow::new( 2018, PeriodLabel::Season(Season::Dry), 0.9, 5));
    table.rows.push( AggregateRow::sentinel( 2018, PeriodLabel::Season(Season::Wet), 0));

    assert_eq!( table_series( &table), vec![ (ymd(2018,11,1), 0.9) ]);
}
