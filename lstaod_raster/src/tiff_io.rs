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

use std::{fs::File, io::BufReader, path::{Path,PathBuf}};
use ndarray::Array2;
use ron::ser::PrettyConfig;
use serde::{Serialize,Deserialize};
use tiff::{
    decoder::{Decoder,DecodingResult},
    encoder::{Compression as TiffCompression, DeflateLevel, TiffEncoder, colortype}
};
use tracing::debug;

use lstaod_common::fs::filepath_contents_as_string;
use crate::grid::GridGeometry;
use crate::observation::Composite;
use crate::errors::{LstAodRasterError, Result, op_failed};

/// the georeference of single band rasters that is kept in RON sidecar files (`grid.ron` for catalog directories,
/// `<stem>.grid.ron` for exported composites). `nodata` is the stored value that represents missing pixels
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct GridInfo {
    pub grid: GridGeometry,
    #[serde(default)]
    pub nodata: Option<f64>,
}

impl GridInfo {
    pub fn load (path: impl AsRef<Path>)->Result<Self> {
        let s = filepath_contents_as_string( &path.as_ref())?;
        Ok( ron::de::from_str( &s)? )
    }

    pub fn save (&self, path: impl AsRef<Path>)->Result<()> {
        let s = ron::ser::to_string_pretty( self, PrettyConfig::new())?;
        std::fs::write( path, s)?;
        Ok(())
    }
}

/// path of the grid sidecar file for a given raster file, e.g. `a/b.tif` -> `a/b.grid.ron`
pub fn sidecar_path (path: &Path)->PathBuf {
    path.with_extension("grid.ron")
}

/// read the first band of a TIFF into an (rows,cols) array. Stored `nodata` values and non-finite values map to NaN
pub fn read_tiff_band (path: impl AsRef<Path>, nodata: Option<f64>)->Result<Array2<f64>> {
    let path = path.as_ref();
    let reader = BufReader::new( File::open(path)?);
    let mut decoder = Decoder::new( reader)?;

    let (w, h) = decoder.dimensions()?;
    let width = w as usize;
    let height = h as usize;

    let data: Vec<f64> = match decoder.read_image()? {
        DecodingResult::U8(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::U16(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::U32(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::I8(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::I16(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::I32(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::F32(v) => v.into_iter().map( f64::from).collect(),
        DecodingResult::F64(v) => v,
        _ => return Err( LstAodRasterError::UnsupportedPixelFormat( path.display().to_string()))
    };

    if data.len() != width * height {
        // interleaved multi-sample pixels
        return Err( LstAodRasterError::UnsupportedPixelFormat(
            format!("{} has {} samples for {}x{} pixels", path.display(), data.len(), width, height)))
    }

    let data = data.into_iter().map( |x| {
        if !x.is_finite() || nodata.is_some_and( |nd| x == nd) { f64::NAN } else { x }
    }).collect();

    Ok( Array2::from_shape_vec( (height, width), data)? )
}

/// write a composite as deflate compressed Gray32Float TIFF (NaN for pixels without data) together with a
/// `<stem>.grid.ron` sidecar that holds the grid geometry
pub fn write_composite_tiff (path: impl AsRef<Path>, composite: &Composite)->Result<()> {
    let path = path.as_ref();
    let (height, width) = composite.grid.shape();
    if width == 0 || height == 0 {
        return Err( op_failed!("cannot write empty composite to {}", path.display()))
    }

    let data: Vec<f32> = composite.values.iter().map( |&x| x as f32).collect();

    let mut out_file = File::create( path)?;
    let mut tiff = TiffEncoder::new( &mut out_file)?.with_compression( TiffCompression::Deflate(DeflateLevel::Best));
    tiff.write_image::<colortype::Gray32Float>( width as u32, height as u32, &data)?;

    GridInfo { grid: composite.grid, nodata: None }.save( sidecar_path( path))?;
    debug!("saved composite {}", path.display());
    Ok(())
}

/// read a composite that was written by `write_composite_tiff`. Counts are reconstructed as 1 for valid pixels
pub fn read_composite_tiff (path: impl AsRef<Path>)->Result<Composite> {
    let path = path.as_ref();
    let info = GridInfo::load( sidecar_path( path))?;
    let values = read_tiff_band( path, info.nodata)?;

    if values.dim() != info.grid.shape() {
        return Err( LstAodRasterError::GridMismatch( format!("{} has shape {:?}, sidecar grid {}", path.display(), values.dim(), info.grid)))
    }
    let counts = values.mapv( |x| if x.is_finite() { 1u32 } else { 0 });
    Ok( Composite { grid: info.grid, values, counts } )
}
