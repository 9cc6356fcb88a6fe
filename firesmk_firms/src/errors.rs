/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “FiresMK” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FirmsError>;

#[derive(Error,Debug)]
pub enum FirmsError {

   #[error("fetch error {0}")]
   FetchError( #[from] firesmk_common::net::NetError),

   #[error("IO error {0}")]
   IOError( #[from] std::io::Error),

   #[error("CSV error {0}")]
   CsvError( #[from] csv::Error),

   #[error("missing field {0}")]
   MissingFieldError( String ),

   #[error("invalid acquisition time {0}")]
   InvalidAcqTimeError( u32 ),

   #[error("invalid acquisition date {0}")]
   InvalidAcqDateError( String ),

   #[error("config error {0}")]
   ConfigError( String ),
}

macro_rules! missing_field {
    ($fmt:literal $(, $arg:expr )* ) => {
        FirmsError::MissingFieldError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use missing_field;

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        FirmsError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
