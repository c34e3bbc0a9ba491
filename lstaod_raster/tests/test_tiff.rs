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

use std::{fs::File, path::Path};
use chrono::NaiveDate;
use ndarray::array;
use tiff::encoder::{TiffEncoder, colortype};
use lstaod_common::datetime::DateRange;
use lstaod_common::geo::{GeoRect, Region, METERS_PER_DEGREE};
use lstaod_raster::*;

// run with "cargo test test_xx -- --nocapture"

fn grid ()->GridGeometry { GridGeometry::new( 3.0, 6.6, 0.1, 0.1, 2, 2) }

fn write_u16_tiff (path: &Path, data: &[u16]) {
    let mut file = File::create( path).unwrap();
    let mut enc = TiffEncoder::new( &mut file).unwrap();
    enc.write_image::<colortype::Gray16>( 2, 2, data).unwrap();
}

#[test]
fn test_composite_tiff_roundtrip () {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Lagos_LST_2020_01.tif");

    let composite = Composite {
        grid: grid(),
        values: array![[25.5, f64::NAN], [30.25, 31.0]],
        counts: array![[1, 0], [2, 3]],
    };
    write_composite_tiff( &path, &composite).unwrap();
    assert!( dir.path().join("Lagos_LST_2020_01.grid.ron").is_file());

    let c = read_composite_tiff( &path).unwrap();
    println!("read back: {:?}", c.values);
    assert_eq!( c.grid, grid());
    assert_eq!( c.values[[0,0]], 25.5);
    assert!( c.values[[0,1]].is_nan());
    assert_eq!( c.values[[1,0]], 30.25);
    assert_eq!( c.n_valid_pixels(), 3);
}

#[test]
fn test_dir_source () {
    let root = tempfile::tempdir().unwrap();
    let coll_dir = root.path().join("MOD11A2");
    std::fs::create_dir_all( &coll_dir).unwrap();

    GridInfo { grid: grid(), nodata: Some(0.0) }.save( coll_dir.join("grid.ron")).unwrap();
    write_u16_tiff( &coll_dir.join("LST_Day_1km_20200101.tif"), &[15000, 15100, 0, 15200]);
    write_u16_tiff( &coll_dir.join("LST_Day_1km_20200109.tif"), &[15000, 15100, 15300, 0]);
    write_u16_tiff( &coll_dir.join("LST_Day_1km_20200201.tif"), &[1, 1, 1, 1]);
    write_u16_tiff( &coll_dir.join("QC_Day_20200101.tif"), &[1, 1, 1, 1]);
    std::fs::write( coll_dir.join("README.txt"), "not a raster").unwrap();

    let src = DirRasterSource::new( root.path());
    let catalog = src.catalog( "MOD11A2").unwrap();
    for rf in &catalog { println!("{:?}", rf) }
    assert_eq!( catalog.len(), 4);

    let var = Variable::new( "MOD11A2", "LST_Day_1km");
    let region = Region::from_rect( "box", &GeoRect::from_wsen( 3.0, 6.4, 3.2, 6.6));
    let jan = DateRange::month( 2020, 1).unwrap();

    let set = src.query( &var, &jan, &region).unwrap();
    assert_eq!( set.len(), 2);

    let first = set.observations()[0].band( "LST_Day_1km").unwrap();
    assert_eq!( first[[0,0]], 15000.0);
    assert!( first[[1,0]].is_nan()); // nodata

    let c = src.temporal_mean( &set).unwrap().unwrap();
    assert_eq!( c.values[[0,1]], 15100.0);
    assert_eq!( c.values[[1,0]], 15300.0);
    assert_eq!( c.values[[1,1]], 15200.0);

    // no overlap with region
    let far = Region::from_rect( "far", &GeoRect::from_wsen( 20.0, 20.0, 21.0, 21.0));
    assert!( src.query( &var, &jan, &far).unwrap().is_empty());

    // unknown collection
    let missing = Variable::new( "MCD19A2", "Optical_Depth_047");
    assert!( src.query( &missing, &jan, &region).is_err());
}
