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

use std::path::{Path,PathBuf};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug,warn};

use lstaod_common::datetime::{DateRange, parse_ymd, utc_datetime_of};
use lstaod_common::fs::matching_files_in_dir;
use lstaod_common::geo::Region;

use crate::source::RasterSource;
use crate::observation::{Observation, ObservationSet, Variable};
use crate::tiff_io::{GridInfo, read_tiff_band, sidecar_path};
use crate::errors::{LstAodRasterError, Result};

/// name of the per-collection grid definition file
pub const GRID_FILE: &str = "grid.ron";

lazy_static! {
    // <band>_<YYYYMMDD>.tif
    static ref RASTER_RE: Regex = Regex::new( r"^(.+)_(\d{8})\.tiff?$").unwrap();
}

/// a catalog entry of a DirRasterSource
#[derive(Debug,Clone,PartialEq)]
pub struct RasterFile {
    pub band: String,
    pub date: NaiveDate,
    pub path: PathBuf,
}

/// a file system catalog of single band GeoTIFFs with the layout
/// ```text
/// <root>/<collection>/grid.ron
/// <root>/<collection>/<band>_<YYYYMMDD>.tif
/// ```
/// `grid.ron` holds the [`GridInfo`] shared by all rasters of the collection. Individual files can override it
/// with a `<stem>.grid.ron` sidecar, which is what `write_composite_tiff` produces
#[derive(Debug,Clone)]
pub struct DirRasterSource {
    root: PathBuf,
}

impl DirRasterSource {
    pub fn new (root: impl AsRef<Path>)->Self {
        DirRasterSource { root: root.as_ref().to_path_buf() }
    }

    pub fn root (&self)->&Path { &self.root }

    pub fn collection_dir (&self, variable: &Variable)->PathBuf {
        self.root.join( &variable.collection)
    }

    /// all raster files of the collection (for any band), sorted by band and date
    pub fn catalog (&self, collection: &str)->Result<Vec<RasterFile>> {
        let dir = self.root.join( collection);
        if !dir.is_dir() {
            return Err( LstAodRasterError::NoSuchVariable( format!("{collection} (no dir {})", dir.display())))
        }

        let mut list: Vec<RasterFile> = Vec::new();
        for path in matching_files_in_dir( &dir, &RASTER_RE)? {
            if let Some(rf) = raster_file( &path) {
                list.push( rf)
            } else {
                warn!("ignoring raster file with invalid date {}", path.display());
            }
        }
        list.sort_by( |a,b| a.band.cmp( &b.band).then( a.date.cmp( &b.date)));
        Ok(list)
    }

    /// the catalog entries of a variable that fall into the given date range
    pub fn files_in_range (&self, variable: &Variable, range: &DateRange)->Result<Vec<RasterFile>> {
        Ok( self.catalog( &variable.collection)?.into_iter()
            .filter( |rf| rf.band == variable.band && range.contains_date( &rf.date))
            .collect() )
    }

    pub fn grid_info (&self, variable: &Variable)->Result<GridInfo> {
        GridInfo::load( self.collection_dir( variable).join( GRID_FILE))
    }

    fn file_grid_info (&self, path: &Path, default_info: &Option<GridInfo>, variable: &Variable)->Result<GridInfo> {
        let sidecar = sidecar_path( path);
        if sidecar.is_file() {
            GridInfo::load( sidecar)
        } else if let Some(info) = default_info {
            Ok( info.clone() )
        } else {
            Err( LstAodRasterError::NoSuchVariable( format!("{variable} has no {GRID_FILE} and {} has no sidecar", path.display())))
        }
    }
}

fn raster_file (path: &Path)->Option<RasterFile> {
    let fname = path.file_name()?.to_str()?;
    let caps = RASTER_RE.captures( fname)?;
    let band = caps.get(1)?.as_str().to_string();
    let date = parse_ymd( caps.get(2)?.as_str())?;
    Some( RasterFile { band, date, path: path.to_path_buf() } )
}

impl RasterSource for DirRasterSource {
    fn query (&self, variable: &Variable, range: &DateRange, region: &Region)->Result<ObservationSet> {
        let files = self.files_in_range( variable, range)?;

        let grid_path = self.collection_dir( variable).join( GRID_FILE);
        let default_info = if grid_path.is_file() { Some( GridInfo::load( &grid_path)?) } else { None };

        let mut observations = Vec::with_capacity( files.len());
        for rf in &files {
            let info = self.file_grid_info( &rf.path, &default_info, variable)?;
            if !region.intersects_rect( &info.grid.bounds()) {
                debug!("skipping {}, outside of region {}", rf.path.display(), region.name());
                continue
            }

            let values = read_tiff_band( &rf.path, info.nodata)?;
            let obs = Observation::new( utc_datetime_of( rf.date), info.grid).with_band( &variable.band, values)?;
            observations.push( obs);
        }
        debug!("loaded {} of {} files for {} in {}", observations.len(), files.len(), variable, range);

        Ok( ObservationSet::from_observations( &variable.band, observations) )
    }
}
