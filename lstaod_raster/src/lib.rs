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

//! gridded observation retrieval and reduction. This crate defines the [`RasterSource`] abstraction the period
//! aggregator is based on, the observation / composite types it operates on and two source implementations:
//! an in-memory catalog ([`MemRasterSource`]) and a directory catalog of single band GeoTIFFs ([`DirRasterSource`])

pub mod errors;
pub mod grid;
pub mod units;
pub mod observation;
pub mod source;
pub mod mem_source;
pub mod dir_source;
pub mod tiff_io;

pub use errors::{LstAodRasterError, Result};
pub use grid::GridGeometry;
pub use units::UnitTransform;
pub use observation::{Variable, Observation, ObservationSet, Composite};
pub use source::{RasterSource, meters};
pub use mem_source::MemRasterSource;
pub use dir_source::{DirRasterSource, RasterFile};
pub use tiff_io::{GridInfo, read_tiff_band, write_composite_tiff, read_composite_tiff};
