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

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};

use lstaod_common::datetime::{DateRange, DateRangeSet, first_of_month};
use crate::errors::{LstAodPeriodsError, Result};

/* #region PartitionMode *****************************************************************************************/

/// how a year is partitioned into aggregation buckets
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub enum PartitionMode {
    Monthly,
    Seasonal,
    Yearly,
}

impl PartitionMode {
    pub const ALL: [PartitionMode;3] = [PartitionMode::Monthly, PartitionMode::Seasonal, PartitionMode::Yearly];

    pub fn buckets_per_year (&self)->usize {
        match self {
            PartitionMode::Monthly => 12,
            PartitionMode::Seasonal => 2,
            PartitionMode::Yearly => 1,
        }
    }

    /// the period labels of one year in enumeration order
    pub fn labels (&self)->Vec<PeriodLabel> {
        match self {
            PartitionMode::Monthly => (1..=12).map( PeriodLabel::Month).collect(),
            PartitionMode::Seasonal => vec![ PeriodLabel::Season(Season::Dry), PeriodLabel::Season(Season::Wet)],
            PartitionMode::Yearly => vec![ PeriodLabel::Annual],
        }
    }

    /// name of the period column in tabular output. Yearly tables have none
    pub fn period_column (&self)->Option<&'static str> {
        match self {
            PartitionMode::Monthly => Some("Month"),
            PartitionMode::Seasonal => Some("Season"),
            PartitionMode::Yearly => None,
        }
    }
}

impl FromStr for PartitionMode {
    type Err = LstAodPeriodsError;

    fn from_str (s: &str)->Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(PartitionMode::Monthly),
            "seasonal" => Ok(PartitionMode::Seasonal),
            "yearly" => Ok(PartitionMode::Yearly),
            _ => Err( LstAodPeriodsError::UnsupportedMode( s.to_string()))
        }
    }
}

impl fmt::Display for PartitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartitionMode::Monthly => "Monthly",
            PartitionMode::Seasonal => "Seasonal",
            PartitionMode::Yearly => "Yearly",
        };
        write!(f, "{s}")
    }
}

/* #endregion PartitionMode */

/* #region PeriodLabel *******************************************************************************************/

/// the two climatological seasons of the study area. The wet season is April through October of a year,
/// the dry season of year Y is November of Y through March of Y+1
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub enum Season {
    Dry,
    Wet,
}

impl Season {
    pub fn label (&self)->&'static str {
        match self {
            Season::Dry => "Dry_Season",
            Season::Wet => "Wet_Season",
        }
    }
}

/// position of a bucket within its year
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub enum PeriodLabel {
    Month(u32),
    Season(Season),
    Annual,
}

impl PeriodLabel {
    pub fn mode (&self)->PartitionMode {
        match self {
            PeriodLabel::Month(_) => PartitionMode::Monthly,
            PeriodLabel::Season(_) => PartitionMode::Seasonal,
            PeriodLabel::Annual => PartitionMode::Yearly,
        }
    }

    /// parse the value of a period column for the given mode ("1".."12", "Dry_Season", "Wet_Season")
    pub fn parse (mode: PartitionMode, s: &str)->Option<PeriodLabel> {
        let s = s.trim();
        match mode {
            PartitionMode::Monthly => s.parse::<u32>().ok().filter( |m| (1..=12).contains(m)).map( PeriodLabel::Month),
            PartitionMode::Seasonal => match s {
                "Dry_Season" => Some( PeriodLabel::Season(Season::Dry)),
                "Wet_Season" => Some( PeriodLabel::Season(Season::Wet)),
                _ => None
            }
            PartitionMode::Yearly => if s.is_empty() { Some(PeriodLabel::Annual) } else { None }
        }
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodLabel::Month(m) => write!(f, "{m}"),
            PeriodLabel::Season(s) => write!(f, "{}", s.label()),
            PeriodLabel::Annual => Ok(())
        }
    }
}

/* #endregion PeriodLabel */

/* #region PeriodBucket ******************************************************************************************/

/// a (year, period) aggregation unit with the calendar ranges it covers. Cross-year seasons are represented
/// as multiple sub-ranges that are queried separately
#[derive(Debug,Clone,PartialEq)]
pub struct PeriodBucket {
    pub year: i32,
    pub label: PeriodLabel,
    pub ranges: DateRangeSet,
}

impl PeriodBucket {
    pub fn new (year: i32, label: PeriodLabel)->Result<Self> {
        Ok( PeriodBucket { year, label, ranges: bucket_ranges( year, label)? } )
    }
}

impl fmt::Display for PeriodBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            PeriodLabel::Annual => write!(f, "{} {}", self.year, self.ranges),
            label => write!(f, "{}/{} {}", self.year, label, self.ranges),
        }
    }
}

/// the date ranges covered by the given period of `year`. Years outside of the calendar range are rejected
pub fn bucket_ranges (year: i32, label: PeriodLabel)->Result<DateRangeSet> {
    let next_year = year.checked_add(1).ok_or( LstAodPeriodsError::InvalidRange { start: year, end: year })?;

    let set = match label {
        PeriodLabel::Month(m) => DateRangeSet::single( DateRange::month( year, m)?),
        PeriodLabel::Annual => DateRangeSet::single( DateRange::year( year)?),
        PeriodLabel::Season(Season::Wet) => DateRangeSet::single( DateRange::from_months( year, 4, year, 11)?),
        PeriodLabel::Season(Season::Dry) => DateRangeSet::from_ranges( [
            DateRange::from_months( year, 11, next_year, 1)?,
            DateRange::from_months( next_year, 1, next_year, 4)?,
        ])?,
    };
    Ok(set)
}

fn check_year_range (year_start: i32, year_end: i32)->Result<()> {
    if year_start > year_end {
        Err( LstAodPeriodsError::InvalidRange { start: year_start, end: year_end })
    } else {
        Ok(())
    }
}

/// all buckets for the inclusive year range, ordered by year and then by period (months 1..12, Dry before Wet)
pub fn enumerate_buckets (year_start: i32, year_end: i32, mode: PartitionMode)->Result<Vec<PeriodBucket>> {
    let n = count_buckets( year_start, year_end, mode)?;
    let labels = mode.labels();

    // the calendar is contiguous, so if both ends are representable all years in between are too
    if let (Some(first), Some(last)) = (labels.first(), labels.last()) {
        PeriodBucket::new( year_start, *first)?;
        PeriodBucket::new( year_end, *last)?;
    }

    let mut buckets = Vec::with_capacity( n);
    for year in year_start..=year_end {
        for label in &labels {
            buckets.push( PeriodBucket::new( year, *label)?);
        }
    }
    Ok(buckets)
}

/// number of buckets `enumerate_buckets` produces for a valid year range
pub fn count_buckets (year_start: i32, year_end: i32, mode: PartitionMode)->Result<usize> {
    check_year_range( year_start, year_end)?;

    let n_years = i64::from(year_end) - i64::from(year_start) + 1;
    n_years.checked_mul( mode.buckets_per_year() as i64)
        .and_then( |n| usize::try_from(n).ok())
        .ok_or( LstAodPeriodsError::InvalidRange { start: year_start, end: year_end })
}

/* #endregion PeriodBucket */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode () {
        assert_eq!( "Seasonal".parse::<PartitionMode>().unwrap(), PartitionMode::Seasonal);
        assert_eq!( " yearly ".parse::<PartitionMode>().unwrap(), PartitionMode::Yearly);
        assert!( matches!( "weekly".parse::<PartitionMode>(), Err(LstAodPeriodsError::UnsupportedMode(m)) if m == "weekly"));
    }

    #[test]
    fn test_parse_label () {
        assert_eq!( PeriodLabel::parse( PartitionMode::Monthly, "7"), Some(PeriodLabel::Month(7)));
        assert_eq!( PeriodLabel::parse( PartitionMode::Monthly, "13"), None);
        assert_eq!( PeriodLabel::parse( PartitionMode::Seasonal, "Wet_Season"), Some(PeriodLabel::Season(Season::Wet)));
        assert_eq!( PeriodLabel::parse( PartitionMode::Yearly, ""), Some(PeriodLabel::Annual));
    }

    #[test]
    fn test_extreme_years () {
        // counting never overflows, even for the full i32 range
        assert_eq!( count_buckets( 0, i32::MAX, PartitionMode::Yearly).unwrap(), i32::MAX as usize + 1);
        assert_eq!( count_buckets( i32::MIN, i32::MAX, PartitionMode::Monthly).unwrap(), (1usize << 32) * 12);

        // years outside of the calendar are errors, not panics
        assert!( bucket_ranges( i32::MAX, PeriodLabel::Season(Season::Dry)).is_err());
        assert!( enumerate_buckets( i32::MAX, i32::MAX, PartitionMode::Seasonal).is_err());
        assert!( enumerate_buckets( 0, i32::MAX, PartitionMode::Yearly).is_err());
        assert!( enumerate_buckets( i32::MIN, i32::MIN, PartitionMode::Monthly).is_err());
    }
}
