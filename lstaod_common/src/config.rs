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

/// RON based configuration loading. Configs are plain serde structs, i.e. each crate defines its own config types
/// and uses `load_config(..)` to instantiate them from *.ron files

use std::path::Path;
use serde::{Deserialize,Serialize};
use ron::ser::PrettyConfig;
use tracing::info;

use crate::errors::Result;
use crate::fs::filepath_contents_as_string;

/// load a config struct from a RON file
pub fn load_config<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let path = path.as_ref();
    let s = filepath_contents_as_string( &path)?;
    let config: C = ron::de::from_str( &s)?;
    info!("loaded config {:?}", path);
    Ok(config)
}

/// parse a config struct from a RON string
pub fn config_from_str<C> (s: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::de::from_str( s)? )
}

/// pretty RON serialization of a config, e.g. to generate templates from `Default` impls
pub fn config_to_string<C> (config: &C) -> Option<String> where C: Serialize {
    ron::ser::to_string_pretty( config, PrettyConfig::new().struct_names(true)).ok()
}
