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

pub type Result<T> = std::result::Result<T, LstAodRasterError>;

#[derive(Error,Debug)]
pub enum LstAodRasterError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("common error {0}")]
    CommonError( #[from] lstaod_common::LstAodCommonError),

    #[error("config parse error {0}")]
    ConfigParseError( #[from] ron::error::SpannedError),

    #[error("config write error {0}")]
    ConfigWriteError( #[from] ron::error::Error),

    #[error("Tiff error {0}")]
    TiffError( #[from] tiff::TiffError),

    #[error("array shape error {0}")]
    ShapeError( #[from] ndarray::ShapeError),

    #[error("unsupported pixel format in {0}")]
    UnsupportedPixelFormat( String ),

    #[error("no such variable {0}")]
    NoSuchVariable( String ),

    #[error("observation grids differ: {0}")]
    GridMismatch( String ),

    #[error("operation failed {0}")]
    OpFailedError(String),
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        LstAodRasterError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
