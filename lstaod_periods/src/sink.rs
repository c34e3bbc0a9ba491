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
use tracing::info;

use lstaod_common::fs::ensure_writable_dir;
use crate::period::{PartitionMode, PeriodLabel};
use crate::result::{AggregateRow, AggregateTable};
use crate::errors::{LstAodPeriodsError, Result, op_failed};

/// the consumer of aggregation results, which get stored under a name that is unique per (variable,mode)
pub trait ResultSink {
    fn write_table (&mut self, name: &str, table: &AggregateTable)->Result<()>;
}

/* #region CsvTableSink ******************************************************************************************/

/// writes each table as `<dir>/<name>.csv` with a `Year,[Month|Season,]Mean_<variable>` header.
/// Sentinel values are written as -9999
#[derive(Debug,Clone)]
pub struct CsvTableSink {
    dir: PathBuf,
}

impl CsvTableSink {
    pub fn new (dir: impl AsRef<Path>)->Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        ensure_writable_dir( &dir)?;
        Ok( CsvTableSink { dir } )
    }

    pub fn path_for (&self, name: &str)->PathBuf {
        self.dir.join( format!("{name}.csv"))
    }
}

impl ResultSink for CsvTableSink {
    fn write_table (&mut self, name: &str, table: &AggregateTable)->Result<()> {
        let path = self.path_for( name);
        write_table( &path, table)?;
        info!("saved {} rows to {}", table.len(), path.display());
        Ok(())
    }
}

/// the CSV header of a table
pub fn table_header (table: &AggregateTable)->Vec<String> {
    let mut header = vec![ "Year".to_string() ];
    if let Some(col) = table.mode.period_column() {
        header.push( col.to_string());
    }
    header.push( table.value_column());
    header
}

pub fn write_table (path: impl AsRef<Path>, table: &AggregateTable)->Result<()> {
    let mut wtr = csv::Writer::from_path( path)?;
    wtr.write_record( table_header( table))?;

    for row in &table.rows {
        let mut rec = vec![ row.year.to_string() ];
        if table.mode != PartitionMode::Yearly {
            rec.push( row.label().to_string());
        }
        rec.push( row.value.to_string());
        wtr.write_record( &rec)?;
    }
    wtr.flush()?;
    Ok(())
}

/// parse a CSV that was written by a [`CsvTableSink`]. The partition mode is derived from the header.
/// Observation counts are not stored and read back as 0
pub fn read_table (path: impl AsRef<Path>)->Result<AggregateTable> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path( path)?;
    let header: Vec<String> = rdr.headers()?.iter().map( |s| s.trim().to_string()).collect();

    let mode = match header.iter().map( |s| s.as_str()).collect::<Vec<&str>>().as_slice() {
        ["Year", "Month", _] => PartitionMode::Monthly,
        ["Year", "Season", _] => PartitionMode::Seasonal,
        ["Year", _] => PartitionMode::Yearly,
        _ => return Err( LstAodPeriodsError::MalformedTable( format!("{}: unexpected header {:?}", path.display(), header)))
    };

    let value_col = header.last().map( |s| s.as_str()).unwrap_or_default();
    let variable = value_col.strip_prefix("Mean_")
        .ok_or_else( || LstAodPeriodsError::MalformedTable( format!("{}: no Mean_ value column", path.display())))?;

    let mut table = AggregateTable::new( variable, mode);
    for (i,rec) in rdr.records().enumerate() {
        let rec = rec?;
        let malformed = || LstAodPeriodsError::MalformedTable( format!("{}: bad record {}", path.display(), i+1));

        let year: i32 = rec.get(0).and_then( |s| s.trim().parse().ok()).ok_or_else( malformed)?;
        let label = match mode {
            PartitionMode::Yearly => PeriodLabel::Annual,
            _ => rec.get(1).and_then( |s| PeriodLabel::parse( mode, s)).ok_or_else( malformed)?
        };
        let value: f64 = rec.get( header.len()-1).and_then( |s| s.trim().parse().ok()).ok_or_else( malformed)?;

        table.rows.push( AggregateRow::new( year, label, value, 0));
    }

    Ok(table)
}

/* #endregion CsvTableSink */

/// keeps written tables in memory
#[derive(Debug,Default)]
pub struct MemTableSink {
    pub tables: Vec<(String,AggregateTable)>,
}

impl ResultSink for MemTableSink {
    fn write_table (&mut self, name: &str, table: &AggregateTable)->Result<()> {
        self.tables.push( (name.to_string(), table.clone()));
        Ok(())
    }
}
