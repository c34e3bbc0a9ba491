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

use anyhow::Result;
use lstaod_common::{define_cli, check_cli, init_tracing};
use lstaod_periods::{read_table, AggregateTable, PartitionMode};
use lstaod_periods::analysis::{ThresholdMethod, summarize, climatology, join_tables, table_series, detect_events, max_step_months};

define_cli! { ARGS [about="descriptive statistics and event detection for aggregated period tables"] =
    join: Option<String> [help="join each table with this table on (Year,Period)", short, long],
    events: Option<String> [help="detect exceedance events with percentile:<p> or zscore:<z>", short, long],
    min_duration: u32 [help="minimum event duration in months", long, default_value="2"],
    tables: Vec<String> [help="CSV tables written by aggregate_periods", required=true]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let method = ARGS.events.as_ref().map( |s| s.parse::<ThresholdMethod>()).transpose()?;
    let other = ARGS.join.as_ref().map( |p| read_table( p)).transpose()?;

    for path in &ARGS.tables {
        let table = read_table( path)?;
        println!("--- {path} ({} {} rows)", table.mode, table.len());
        println!("{}", summarize( &table));

        if table.mode != PartitionMode::Yearly {
            let clim: Vec<String> = climatology( &table).iter().map( |(label,v)| format!("{label}={v:.3}")).collect();
            println!("climatology: {}", clim.join(" "));
        }

        if let Some(other) = &other {
            print_join( &table, other)?;
        }

        if let Some(method) = method {
            let events = detect_events( &table_series( &table), method, ARGS.min_duration, max_step_months( table.mode));
            println!("{} events ({method}, >= {} months):", events.len(), ARGS.min_duration);
            for (i,e) in events.iter().enumerate() {
                println!("  event {}: {e}", i+1);
            }
        }
    }

    Ok(())
}

fn print_join (table: &AggregateTable, other: &AggregateTable)->Result<()> {
    let rows = join_tables( table, other)?;
    println!("joined with {}: {} rows", other.value_column(), rows.len());
    for r in &rows {
        let fmt = |v: Option<f64>| v.map( |v| format!("{v:.4}")).unwrap_or_else( || "-".to_string());
        println!("  {} {:>10} {:>12} {:>12}", r.year, r.period.to_string(), fmt(r.a), fmt(r.b));
    }
    Ok(())
}
