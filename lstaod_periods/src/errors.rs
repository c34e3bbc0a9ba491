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

use thiserror::Error;
use lstaod_raster::LstAodRasterError;

pub type Result<T> = std::result::Result<T, LstAodPeriodsError>;

#[derive(Error,Debug)]
pub enum LstAodPeriodsError {
    #[error("invalid year range {start}..={end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("unsupported partition mode '{0}'")]
    UnsupportedMode(String),

    /// raster source errors are passed through unchanged
    #[error(transparent)]
    Source( #[from] LstAodRasterError),

    #[error("common error {0}")]
    CommonError( #[from] lstaod_common::LstAodCommonError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("malformed table {0}")]
    MalformedTable(String),

    #[error("operation failed {0}")]
    OpFailedError(String),
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        LstAodPeriodsError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
