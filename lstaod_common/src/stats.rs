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

/// a simple incremental min/max/mean/variance accumulator (Welford's online algorithm).
/// Non-finite inputs are counted as missing and otherwise ignored
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct MinMaxAvg {
    pub n: usize,
    pub n_missing: usize,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    m2: f64,
}

impl MinMaxAvg {
    pub fn new()->Self { MinMaxAvg { n: 0, n_missing: 0, min: f64::MAX, max: f64::MIN, avg: f64::NAN, m2: 0.0 } }

    /// add a new observation
    pub fn add (&mut self, x: f64) {
        if !x.is_finite() {
            self.n_missing += 1;
            return
        }

        self.n += 1;

        if self.n > 1 {
            let delta = x - self.avg;
            self.avg = self.avg + delta / self.n as f64;
            self.m2 += delta * (x - self.avg);
            if x < self.min { self.min = x }
            if x > self.max { self.max = x }
        } else {
            self.min = x;
            self.max = x;
            self.avg = x;
        }
    }

    pub fn add_missing (&mut self) { self.n_missing += 1 }

    pub fn is_empty (&self)->bool { self.n == 0 }

    pub fn mean (&self)->Option<f64> { if self.n > 0 { Some(self.avg) } else { None } }

    /// sample (n-1) variance. None for less than two observations
    pub fn variance (&self)->Option<f64> {
        if self.n > 1 { Some( self.m2 / (self.n - 1) as f64) } else { None }
    }

    pub fn std_dev (&self)->Option<f64> { self.variance().map( f64::sqrt) }
}

impl Default for MinMaxAvg {
    fn default()->Self { MinMaxAvg::new() }
}

impl FromIterator<f64> for MinMaxAvg {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = MinMaxAvg::new();
        for x in iter { acc.add(x) }
        acc
    }
}

/// linear interpolated percentile (0..=100) of given values, equivalent to numpy's default method.
/// Non-finite values are ignored. Returns None if there are no finite values
pub fn percentile (values: &[f64], pct: f64)->Option<f64> {
    let mut v: Vec<f64> = values.iter().copied().filter( |x| x.is_finite()).collect();
    if v.is_empty() { return None }
    v.sort_by( |a,b| a.total_cmp(b));

    let pct = pct.clamp( 0.0, 100.0);
    let rank = (pct / 100.0) * (v.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Some( v[lo] + (v[hi] - v[lo]) * frac)
}
