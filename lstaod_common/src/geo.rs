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

/// this module provides the (lon/lat degree based) region geometry that restricts and reduces observations.
/// Following our design principles we wrap existing crates ([geo](https://docs.rs/geo/latest/geo/index.html) and
/// [geojson](https://docs.rs/geojson/latest/geojson/)) instead of re-implementing geometric algorithms

use std::{fmt, path::Path};
use serde::{Serialize,Deserialize};
use geo::{BoundingRect, Contains, Coord, InteriorPoint, MultiPolygon, Point, Polygon, Rect};
use geojson::GeoJson;
use uom::si::{f64::Length, length::meter};

use crate::errors::{LstAodCommonError, Result};
use crate::fs::filepath_contents_as_string;

/// meters per degree latitude (mean), used to convert sampling resolutions into degrees
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/* #region GeoRect ***********************************************************************************************/

/// a lon/lat rectangle in degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoRect {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoRect {
    pub fn from_wsen (west: f64, south: f64, east: f64, north: f64)->Self {
        GeoRect { west: west.min(east), south: south.min(north), east: west.max(east), north: south.max(north) }
    }

    pub fn from_rect (rect: &Rect)->Self {
        GeoRect::from_wsen( rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    pub fn to_rect (&self)->Rect {
        Rect::new( Coord{ x: self.west, y: self.south }, Coord{ x: self.east, y: self.north })
    }

    #[inline] pub fn width (&self)->f64 { self.east - self.west }
    #[inline] pub fn height (&self)->f64 { self.north - self.south }

    pub fn center (&self)->(f64,f64) { ((self.west + self.east) / 2.0, (self.south + self.north) / 2.0) }

    /// boundary inclusive
    pub fn contains_lon_lat (&self, lon: f64, lat: f64)->bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    /// true if the two rectangles share any area or boundary
    pub fn intersects (&self, other: &GeoRect)->bool {
        self.west <= other.east && other.west <= self.east && self.south <= other.north && other.south <= self.north
    }
}

impl fmt::Display for GeoRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[w:{},s:{},e:{},n:{}]", self.west, self.south, self.east, self.north)
    }
}

/* #endregion GeoRect */

/* #region Region ************************************************************************************************/

/// a fixed (possibly multi-part) polygon such as a city boundary that is used to spatially restrict and reduce
/// observations. Regions are passed explicitly to all operations that need them
#[derive(Debug,Clone)]
pub struct Region {
    name: String,
    boundary: MultiPolygon,
    bbox: GeoRect,
}

impl Region {
    pub fn from_multi_polygon (name: impl ToString, boundary: MultiPolygon)->Result<Self> {
        let rect = boundary.bounding_rect()
            .ok_or_else( || LstAodCommonError::InvalidRegion( format!("region '{}' has no coordinates", name.to_string())))?;
        Ok( Region { name: name.to_string(), boundary, bbox: GeoRect::from_rect(&rect) } )
    }

    pub fn from_polygon (name: impl ToString, polygon: Polygon)->Result<Self> {
        Region::from_multi_polygon( name, MultiPolygon::new( vec![polygon]))
    }

    pub fn from_rect (name: impl ToString, rect: &GeoRect)->Self {
        let bbox = *rect;
        let boundary = MultiPolygon::new( vec![rect.to_rect().to_polygon()]);
        Region { name: name.to_string(), boundary, bbox }
    }

    /// accepts GeoJSON Geometry (Polygon or MultiPolygon), Feature or FeatureCollection input. All polygonal
    /// parts are merged into one boundary, which is what we want for administrative boundaries that come as
    /// one feature per district
    pub fn from_geojson_str (name: impl ToString, s: &str)->Result<Self> {
        let gj: GeoJson = s.parse()?;
        let geometries: Vec<geojson::Geometry> = match gj {
            GeoJson::Geometry(g) => vec![g],
            GeoJson::Feature(f) => f.geometry.into_iter().collect(),
            GeoJson::FeatureCollection(fc) => fc.features.into_iter().filter_map( |f| f.geometry).collect(),
        };

        let mut polygons: Vec<Polygon> = Vec::new();
        for g in geometries {
            match geo_types::Geometry::<f64>::try_from(g)? {
                geo_types::Geometry::Polygon(p) => polygons.push(p),
                geo_types::Geometry::MultiPolygon(mp) => polygons.extend( mp.0),
                other => return Err( LstAodCommonError::InvalidRegion( format!("not a polygonal geometry: {other:?}")))
            }
        }

        if polygons.is_empty() {
            return Err( LstAodCommonError::InvalidRegion( "no polygons in GeoJSON input".to_string()))
        }

        Region::from_multi_polygon( name, MultiPolygon::new(polygons))
    }

    /// load region from GeoJSON file, using the file stem as region name
    pub fn load_geojson (path: impl AsRef<Path>)->Result<Self> {
        let path = path.as_ref();
        let name = path.file_stem().and_then( |s| s.to_str()).unwrap_or("region");
        let s = filepath_contents_as_string( &path)?;
        Region::from_geojson_str( name, &s)
    }

    #[inline] pub fn name (&self)->&str { &self.name }
    #[inline] pub fn bbox (&self)->&GeoRect { &self.bbox }
    #[inline] pub fn boundary (&self)->&MultiPolygon { &self.boundary }

    pub fn contains_lon_lat (&self, lon: f64, lat: f64)->bool {
        self.bbox.contains_lon_lat( lon, lat) && self.boundary.contains( &Point::new( lon, lat))
    }

    /// cheap bbox level test used to skip rasters that can't possibly contribute
    pub fn intersects_rect (&self, rect: &GeoRect)->bool {
        self.bbox.intersects( rect)
    }

    /// convert a sampling resolution into (lon,lat) degree steps at the center latitude of this region
    pub fn degree_steps (&self, resolution: Length)->(f64,f64) {
        let res_m = resolution.get::<meter>();
        let (_,lat) = self.bbox.center();
        let d_lat = res_m / METERS_PER_DEGREE;
        let d_lon = res_m / (METERS_PER_DEGREE * lat.to_radians().cos().max(1e-6));
        (d_lon, d_lat)
    }

    /// regular lattice of (lon,lat) sample points with given resolution that fall inside of the region boundary.
    /// Sample points are cell centers of the lattice anchored at the bbox south west corner. Regions that are
    /// too small or too thin to contain any lattice point are sampled at a single interior point
    pub fn sample_points (&self, resolution: Length)->Vec<(f64,f64)> {
        let (d_lon, d_lat) = self.degree_steps( resolution);
        let mut pts = Vec::new();
        if !(d_lon > 0.0 && d_lat > 0.0) { return pts }

        let nx = (self.bbox.width() / d_lon).ceil().max(1.0) as usize;
        let ny = (self.bbox.height() / d_lat).ceil().max(1.0) as usize;

        for j in 0..ny {
            let lat = self.bbox.south + (j as f64 + 0.5) * d_lat;
            for i in 0..nx {
                let lon = self.bbox.west + (i as f64 + 0.5) * d_lon;
                if self.boundary.contains( &Point::new( lon, lat)) {
                    pts.push( (lon,lat));
                }
            }
        }

        if pts.is_empty() {
            if let Some(p) = self.boundary.interior_point() {
                pts.push( (p.x(), p.y()));
            }
        }
        pts
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.bbox)
    }
}

/* #endregion Region */
