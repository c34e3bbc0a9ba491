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

use std::fmt;
use serde::{Serialize,Deserialize};
use lstaod_common::geo::GeoRect;

/// geometry of a north-up regular lon/lat grid. `west`,`north` are the degrees of the outer upper left
/// corner, `res_x`,`res_y` the (positive) cell sizes in degrees. Rows go from north to south
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GridGeometry {
    pub west: f64,
    pub north: f64,
    pub res_x: f64,
    pub res_y: f64,
    pub width: usize,
    pub height: usize,
}

impl GridGeometry {
    pub fn new (west: f64, north: f64, res_x: f64, res_y: f64, width: usize, height: usize)->Self {
        GridGeometry { west, north, res_x: res_x.abs(), res_y: res_y.abs(), width, height }
    }

    /// (rows,cols) shape as used by ndarray
    #[inline] pub fn shape (&self)->(usize,usize) { (self.height, self.width) }

    #[inline] pub fn east (&self)->f64 { self.west + self.res_x * self.width as f64 }
    #[inline] pub fn south (&self)->f64 { self.north - self.res_y * self.height as f64 }

    pub fn bounds (&self)->GeoRect {
        GeoRect::from_wsen( self.west, self.south(), self.east(), self.north)
    }

    /// (row,col) of the cell that contains the given position. Cells include their west/north edges
    pub fn cell_of (&self, lon: f64, lat: f64)->Option<(usize,usize)> {
        let x = (lon - self.west) / self.res_x;
        let y = (self.north - lat) / self.res_y;

        if x >= 0.0 && y >= 0.0 {
            let col = x.floor() as usize;
            let row = y.floor() as usize;
            if col < self.width && row < self.height { return Some((row,col)) }
        }
        None
    }

    /// equal within a small fraction of a cell, to tolerate float noise in stored geotransforms
    pub fn is_compatible (&self, other: &GridGeometry)->bool {
        let eps_x = self.res_x * 1e-6;
        let eps_y = self.res_y * 1e-6;

        self.width == other.width && self.height == other.height
            && (self.west - other.west).abs() <= eps_x && (self.north - other.north).abs() <= eps_y
            && (self.res_x - other.res_x).abs() <= eps_x && (self.res_y - other.res_y).abs() <= eps_y
    }
}

impl fmt::Display for GridGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ ({},{}) res ({},{})", self.width, self.height, self.west, self.north, self.res_x, self.res_y)
    }
}
