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

// run with "cargo test test_xx -- --nocapture"

fn ymd (y: i32, m: u32, d: u32)->NaiveDate { NaiveDate::from_ymd_opt(y,m,d).unwrap() }

#[test]
fn test_bucket_counts () {
    for (ys,ye) in [(2017,2017), (2017,2025), (2000,2003)] {
        let years = (ye - ys + 1) as usize;
        assert_eq!( count_buckets( ys, ye, PartitionMode::Monthly).unwrap(), 12 * years);
        assert_eq!( count_buckets( ys, ye, PartitionMode::Seasonal).unwrap(), 2 * years);
        assert_eq!( count_buckets( ys, ye, PartitionMode::Yearly).unwrap(), years);

        for mode in PartitionMode::ALL {
            assert_eq!( enumerate_buckets( ys, ye, mode).unwrap().len(), count_buckets( ys, ye, mode).unwrap());
        }
    }
}

#[test]
fn test_invalid_range () {
    assert!( matches!( count_buckets( 2020, 2019, PartitionMode::Yearly), Err(LstAodPeriodsError::InvalidRange{start:2020, end:2019})));
    assert!( matches!( enumerate_buckets( 2020, 2019, PartitionMode::Monthly), Err(LstAodPeriodsError::InvalidRange{..})));
}

#[test]
fn test_enumeration_order () {
    let buckets = enumerate_buckets( 2017, 2018, PartitionMode::Seasonal).unwrap();
    for b in &buckets { println!("{b}") }

    let keys: Vec<(i32,PeriodLabel)> = buckets.iter().map( |b| (b.year, b.label)).collect();
    assert_eq!( keys, vec![
        (2017, PeriodLabel::Season(Season::Dry)),
        (2017, PeriodLabel::Season(Season::Wet)),
        (2018, PeriodLabel::Season(Season::Dry)),
        (2018, PeriodLabel::Season(Season::Wet)),
    ]);

    let months = enumerate_buckets( 2019, 2020, PartitionMode::Monthly).unwrap();
    let keys: Vec<(i32,PeriodLabel)> = months.iter().map( |b| (b.year, b.label)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!( keys, sorted);
    assert_eq!( keys[0], (2019, PeriodLabel::Month(1)));
    assert_eq!( keys[23], (2020, PeriodLabel::Month(12)));
}

#[test]
fn test_dry_season_membership () {
    let dry = bucket_ranges( 2019, PeriodLabel::Season(Season::Dry)).unwrap();
    println!("dry season 2019: {dry}");
    assert_eq!( dry.len(), 2);

    for d in [ymd(2019,11,1), ymd(2019,12,31), ymd(2020,1,1), ymd(2020,2,29), ymd(2020,3,31)] {
        assert!( dry.contains_date( &d), "{d} should be in dry season 2019");
    }
    for d in [ymd(2019,4,1), ymd(2019,10,31), ymd(2020,4,1), ymd(2020,10,15), ymd(2019,3,31)] {
        assert!( !dry.contains_date( &d), "{d} should not be in dry season 2019");
    }
}

#[test]
fn test_wet_and_annual_ranges () {
    let wet = bucket_ranges( 2021, PeriodLabel::Season(Season::Wet)).unwrap();
    assert_eq!( wet.span().unwrap().start, ymd(2021,4,1));
    assert_eq!( wet.span().unwrap().end, ymd(2021,11,1));

    let year = bucket_ranges( 2020, PeriodLabel::Annual).unwrap();
    assert_eq!( year.num_days(), 366);

    let dec = bucket_ranges( 2020, PeriodLabel::Month(12)).unwrap();
    assert_eq!( dec.span().unwrap().end, ymd(2021,1,1));
}

#[test]
fn test_seasons_partition_the_calendar () {
    // consecutive seasons of consecutive years tile the calendar without gaps from April 2017 on
    let buckets = enumerate_buckets( 2017, 2019, PartitionMode::Seasonal).unwrap();
    let mut wet_dry: Vec<_> = buckets.iter().flat_map( |b| b.ranges.ranges().to_vec()).collect();
    wet_dry.sort_by_key( |r| r.start);

    let days: i64 = wet_dry.iter().filter( |r| r.start >= ymd(2017,4,1) && r.end <= ymd(2020,4,1)).map( |r| r.num_days()).sum();
    assert_eq!( days, (ymd(2020,4,1) - ymd(2017,4,1)).num_days());
}
