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
use ndarray::{Array2, array};
use lstaod_common::datetime::{DateRange, DateRangeSet, utc_datetime_of};
use lstaod_common::geo::{GeoRect, Region, METERS_PER_DEGREE};
use lstaod_raster::*;

// run with "cargo test test_xx -- --nocapture"

fn ymd (y: i32, m: u32, d: u32)->NaiveDate { NaiveDate::from_ymd_opt(y,m,d).unwrap() }

// 2x2 grid of 0.1 deg cells covering [3.0,3.2]x[6.4,6.6]
fn grid ()->GridGeometry { GridGeometry::new( 3.0, 6.6, 0.1, 0.1, 2, 2) }

fn obs (date: NaiveDate, values: Array2<f64>)->Observation {
    Observation::new( utc_datetime_of(date), grid()).with_band( "LST_Day_1km", values).unwrap()
}

fn lst ()->Variable { Variable::new( "MODIS/061/MOD11A2", "LST_Day_1km") }

fn region ()->Region { Region::from_rect( "box", &GeoRect::from_wsen( 3.0, 6.4, 3.2, 6.6)) }

fn source ()->MemRasterSource {
    MemRasterSource::new().with_observations( &lst(), vec![
        obs( ymd(2020,1,1),  array![[1.0, 2.0], [3.0, f64::NAN]]),
        obs( ymd(2020,1,31), array![[3.0, 4.0], [f64::NAN, f64::NAN]]),
        obs( ymd(2020,2,1),  array![[10.0, 10.0], [10.0, 10.0]]),
    ])
}

#[test]
fn test_query_half_open () {
    let src = source();
    let jan = DateRange::month( 2020, 1).unwrap();
    let set = src.query( &lst(), &jan, &region()).unwrap();
    println!("january: {} observations", set.len());
    assert_eq!( set.len(), 2); // Feb 1 is excluded

    let other = Region::from_rect( "far", &GeoRect::from_wsen( 10.0, 10.0, 11.0, 11.0));
    assert!( src.query( &lst(), &jan, &other).unwrap().is_empty());

    let unknown = Variable::new( "MODIS/061/MOD11A2", "LST_Night_1km");
    assert!( matches!( src.query( &unknown, &jan, &region()), Err(LstAodRasterError::NoSuchVariable(_))));
}

#[test]
fn test_query_set_merges_sub_ranges () {
    let src = source();
    let ranges = DateRangeSet::from_ranges( [
        DateRange::new( ymd(2020,2,1), ymd(2020,3,1)).unwrap(),
        DateRange::new( ymd(2020,1,15), ymd(2020,2,1)).unwrap(),
    ]).unwrap();

    let set = src.query_set( &lst(), &ranges, &region()).unwrap();
    let dates: Vec<NaiveDate> = set.observations().iter().map( |o| o.date.date_naive()).collect();
    assert_eq!( dates, vec![ ymd(2020,1,31), ymd(2020,2,1)]);
}

#[test]
fn test_temporal_mean () {
    let src = source();
    let set = src.query( &lst(), &DateRange::month( 2020, 1).unwrap(), &region()).unwrap();
    let c = src.temporal_mean( &set).unwrap().unwrap();
    println!("composite: {:?}", c.values);

    assert_eq!( c.values[[0,0]], 2.0);
    assert_eq!( c.values[[0,1]], 3.0);
    assert_eq!( c.values[[1,0]], 3.0);
    assert!( c.values[[1,1]].is_nan());
    assert_eq!( c.counts, array![[2u32, 2], [1, 0]]);
    assert_eq!( c.n_valid_pixels(), 3);

    let empty = ObservationSet::new( "LST_Day_1km");
    assert!( src.temporal_mean( &empty).unwrap().is_none());
}

#[test]
fn test_temporal_mean_rejects_mixed_grids () {
    let other_grid = GridGeometry::new( 3.0, 6.6, 0.05, 0.05, 2, 2);
    let o = Observation::new( utc_datetime_of( ymd(2020,1,2)), other_grid).with_band( "LST_Day_1km", Array2::zeros((2,2))).unwrap();
    let set = ObservationSet::from_observations( "LST_Day_1km", vec![ obs( ymd(2020,1,1), Array2::zeros((2,2))), o ]);

    assert!( matches!( Composite::temporal_mean( &set), Err(LstAodRasterError::GridMismatch(_))));
}

#[test]
fn test_band_shape_must_match_grid () {
    let r = Observation::new( utc_datetime_of( ymd(2020,1,1)), grid()).with_band( "x", Array2::zeros((3,2)));
    assert!( r.is_err());
}

#[test]
fn test_spatial_mean () {
    let src = source();
    let set = src.query( &lst(), &DateRange::month( 2020, 1).unwrap(), &region()).unwrap();
    let c = src.temporal_mean( &set).unwrap().unwrap();

    // at ~0.05 deg sampling each cell gets the same number of samples, the NaN cell is skipped
    let res = meters( METERS_PER_DEGREE * 0.05);
    let mean = src.spatial_mean( &c, &region(), res).unwrap().unwrap();
    println!("spatial mean: {mean}");
    assert!( (mean - (2.0 + 3.0 + 3.0) / 3.0).abs() < 1e-9);

    // region that only covers the empty cell
    let nan_region = Region::from_rect( "se", &GeoRect::from_wsen( 3.1, 6.4, 3.2, 6.5));
    assert!( src.spatial_mean( &c, &nan_region, res).unwrap().is_none());
}

#[test]
fn test_map_band () {
    let set = source().query( &lst(), &DateRange::month( 2020, 2).unwrap(), &region()).unwrap();
    let celsius = set.map_band( |x| UnitTransform::MODIS_LST_CELSIUS.apply( x));

    let v = celsius.observations()[0].band( "LST_Day_1km").unwrap();
    assert!( (v[[0,0]] - (10.0 * 0.02 - 273.15)).abs() < 1e-9);

    // input set is unchanged
    assert_eq!( set.observations()[0].band( "LST_Day_1km").unwrap()[[0,0]], 10.0);
}
