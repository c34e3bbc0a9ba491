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
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Serialize,Deserialize};

use crate::errors::{LstAodCommonError, Result};

/// a type bound for something we can get a date for.
/// The main purpose of this trait is to avoid having to extract DateTime lists out of already existing collections
pub trait Dated {
    fn date (&self)->DateTime<Utc>;
}

impl<Tz:TimeZone> Dated for DateTime<Tz> {
    fn date (&self)->DateTime<Utc> { self.to_utc() }
}

/// first day of given month. Returns None for months outside 1..=12
#[inline]
pub fn first_of_month (year: i32, month: u32)->Option<NaiveDate> {
    NaiveDate::from_ymd_opt( year, month, 1)
}

/// calendar month arithmetic that saturates at the last representable date
pub fn add_months (date: NaiveDate, n: u32)->NaiveDate {
    date.checked_add_months( Months::new(n)).unwrap_or( NaiveDate::MAX)
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn utc_datetime_of (nd: NaiveDate)->DateTime<Utc> {
    NaiveDateTime::new( nd, NaiveTime::MIN).and_utc()
}

/// parse either "%Y-%m-%d" or "%Y%m%d"
pub fn parse_ymd (s: &str)->Option<NaiveDate> {
    NaiveDate::parse_from_str( s, "%Y-%m-%d").ok()
        .or_else( || NaiveDate::parse_from_str( s, "%Y%m%d").ok())
}

/* #region DateRange *********************************************************************************************/

/// a half-open calendar date range [start,end). Time-of-day of tested timestamps is ignored, i.e. all
/// observations on the start day are included and all observations on the end day are excluded
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new (start: NaiveDate, end: NaiveDate)->Result<Self> {
        if end < start {
            Err( LstAodCommonError::InvalidDateRange( format!("end {end} before start {start}")))
        } else {
            Ok( DateRange{ start, end } )
        }
    }

    /// [year-month-01, year-month-01 + 1 month)
    pub fn month (year: i32, month: u32)->Result<Self> {
        let start = first_of_month( year, month)
            .ok_or_else( || LstAodCommonError::InvalidDateRange( format!("no such month {year}-{month}")))?;
        Ok( DateRange{ start, end: add_months( start, 1) } )
    }

    /// [year-01-01, (year+1)-01-01)
    pub fn year (year: i32)->Result<Self> {
        let start = first_of_month( year, 1)
            .ok_or_else( || LstAodCommonError::InvalidDateRange( format!("year {year} out of range")))?;
        Ok( DateRange{ start, end: add_months( start, 12) } )
    }

    /// [first of start month, first of end month). The end can be in a subsequent year
    pub fn from_months (start_year: i32, start_month: u32, end_year: i32, end_month: u32)->Result<Self> {
        let start = first_of_month( start_year, start_month)
            .ok_or_else( || LstAodCommonError::InvalidDateRange( format!("no such month {start_year}-{start_month}")))?;
        let end = first_of_month( end_year, end_month)
            .ok_or_else( || LstAodCommonError::InvalidDateRange( format!("no such month {end_year}-{end_month}")))?;
        DateRange::new( start, end)
    }

    #[inline] pub fn is_empty (&self)->bool { self.start == self.end }

    #[inline] pub fn contains_date (&self, d: &NaiveDate)->bool { *d >= self.start && *d < self.end }

    pub fn contains<D: Dated> (&self, d: &D)->bool { self.contains_date( &d.date().date_naive()) }

    pub fn overlaps (&self, other: &DateRange)->bool {
        self.start < other.end && other.start < self.end
    }

    /// number of days covered by this range
    pub fn num_days (&self)->i64 { (self.end - self.start).num_days() }

    pub fn start_datetime (&self)->DateTime<Utc> { utc_datetime_of( self.start) }
    pub fn end_datetime (&self)->DateTime<Utc> { utc_datetime_of( self.end) }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

/* #endregion DateRange */

/* #region DateRangeSet ******************************************************************************************/

/// an ordered union of non-overlapping date ranges. Sub-ranges may be adjacent, which is how we represent
/// periods that are queried in separate pieces (e.g. a season that crosses a year boundary)
#[derive(Debug,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
pub struct DateRangeSet {
    ranges: Vec<DateRange>
}

impl DateRangeSet {
    pub fn new ()->Self { DateRangeSet{ ranges: Vec::new() } }

    pub fn single (range: DateRange)->Self { DateRangeSet{ ranges: vec![range] } }

    pub fn from_ranges (ranges: impl IntoIterator<Item=DateRange>)->Result<Self> {
        let mut set = DateRangeSet::new();
        for r in ranges {
            set.push( r)?;
        }
        Ok(set)
    }

    /// add a range, keeping the set sorted by start date. Empty ranges are ignored, overlapping ranges are rejected
    pub fn push (&mut self, range: DateRange)->Result<()> {
        if range.is_empty() { return Ok(()) }

        if let Some(r) = self.ranges.iter().find( |r| r.overlaps(&range)) {
            return Err( LstAodCommonError::InvalidDateRange( format!("{range} overlaps {r}")))
        }

        let idx = self.ranges.partition_point( |r| r.start < range.start);
        self.ranges.insert( idx, range);
        Ok(())
    }

    #[inline] pub fn ranges (&self)->&[DateRange] { &self.ranges }
    #[inline] pub fn len (&self)->usize { self.ranges.len() }
    #[inline] pub fn is_empty (&self)->bool { self.ranges.is_empty() }

    pub fn contains_date (&self, d: &NaiveDate)->bool { self.ranges.iter().any( |r| r.contains_date(d)) }

    pub fn contains<D: Dated> (&self, d: &D)->bool { self.contains_date( &d.date().date_naive()) }

    /// the smallest single range that covers all sub-ranges
    pub fn span (&self)->Option<DateRange> {
        match (self.ranges.first(), self.ranges.last()) {
            (Some(first), Some(last)) => Some( DateRange{ start: first.start, end: last.end }),
            _ => None
        }
    }

    /// true if there are no gaps between consecutive sub-ranges
    pub fn is_contiguous (&self)->bool {
        self.ranges.windows(2).all( |w| w[0].end == w[1].start)
    }

    pub fn num_days (&self)->i64 { self.ranges.iter().map( |r| r.num_days()).sum() }
}

impl fmt::Display for DateRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_first = true;
        for r in &self.ranges {
            if !is_first { write!(f, "∪")?; }
            write!(f, "{r}")?;
            is_first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DateRangeSet {
    type Item = &'a DateRange;
    type IntoIter = std::slice::Iter<'a, DateRange>;

    fn into_iter(self) -> Self::IntoIter { self.ranges.iter() }
}

/* #endregion DateRangeSet */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range_crosses_year () {
        let r = DateRange::month( 2019, 12).unwrap();
        assert_eq!( r.start, NaiveDate::from_ymd_opt(2019,12,1).unwrap());
        assert_eq!( r.end, NaiveDate::from_ymd_opt(2020,1,1).unwrap());
        assert_eq!( r.num_days(), 31);
    }

    #[test]
    fn test_parse_ymd () {
        assert_eq!( parse_ymd("2021-03-04"), NaiveDate::from_ymd_opt(2021,3,4));
        assert_eq!( parse_ymd("20210304"), NaiveDate::from_ymd_opt(2021,3,4));
        assert!( parse_ymd("2021-13-04").is_none());
    }
}
