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

use std::io::Write;
use uom::si::{f64::Length, length::meter};
use lstaod_common::geo::*;

// run with "cargo test test_xx -- --nocapture"

const TRIANGLE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "name": "west" },
      "geometry": { "type": "Polygon", "coordinates": [[ [3.0,6.0], [3.5,6.0], [3.0,6.5], [3.0,6.0] ]] } },
    { "type": "Feature", "properties": { "name": "east" },
      "geometry": { "type": "Polygon", "coordinates": [[ [4.0,6.0], [4.2,6.0], [4.2,6.2], [4.0,6.2], [4.0,6.0] ]] } }
  ]
}"#;

#[test]
fn test_region_from_geojson() {
    let region = Region::from_geojson_str( "lagos", TRIANGLE).unwrap();
    println!("region: {region}");

    assert_eq!( region.name(), "lagos");
    assert_eq!( region.boundary().0.len(), 2);

    let bbox = region.bbox();
    assert_eq!( (bbox.west, bbox.south, bbox.east, bbox.north), (3.0, 6.0, 4.2, 6.5));

    assert!( region.contains_lon_lat( 3.1, 6.1));
    assert!( region.contains_lon_lat( 4.1, 6.1));
    assert!( !region.contains_lon_lat( 3.45, 6.45)); // inside bbox, outside of triangle
    assert!( !region.contains_lon_lat( 3.8, 6.1));   // between parts

    assert!( region.intersects_rect( &GeoRect::from_wsen( 4.1, 6.1, 5.0, 7.0)));
    assert!( !region.intersects_rect( &GeoRect::from_wsen( 5.0, 6.0, 6.0, 7.0)));
}

#[test]
fn test_region_rejects_non_polygons() {
    let point = r#"{ "type": "Point", "coordinates": [3.4, 6.5] }"#;
    assert!( Region::from_geojson_str( "pt", point).is_err());
    assert!( Region::from_geojson_str( "garbage", "{ not json").is_err());
}

#[test]
fn test_load_geojson_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Lagos_Boundary.geojson");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all( TRIANGLE.as_bytes()).unwrap();

    let region = Region::load_geojson( &path).unwrap();
    assert_eq!( region.name(), "Lagos_Boundary");
}

#[test]
fn test_sample_points() {
    // ~0.1 x 0.1 deg box at the equator sampled with ~1.1km spacing -> 10x10 points
    let region = Region::from_rect( "box", &GeoRect::from_wsen( 0.0, 0.0, 0.1, 0.1));
    let res = Length::new::<meter>( METERS_PER_DEGREE * 0.01);
    let pts = region.sample_points( res);
    println!("{} sample points", pts.len());

    assert_eq!( pts.len(), 100);
    assert!( pts.iter().all( |(lon,lat)| region.contains_lon_lat( *lon, *lat)));
}

#[test]
fn test_sample_points_of_small_region() {
    // region is smaller than one lattice step, so no cell center falls inside
    let region = Region::from_rect( "tiny", &GeoRect::from_wsen( 3.05, 6.45, 3.053, 6.453));
    let pts = region.sample_points( Length::new::<meter>( 1000.0));
    println!("{pts:?}");

    assert_eq!( pts.len(), 1);
    let (lon,lat) = pts[0];
    assert!( region.contains_lon_lat( lon, lat));
}
