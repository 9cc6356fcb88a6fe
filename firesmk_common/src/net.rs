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

///! common utility functions for network operations

use reqwest::{Client, StatusCode};

use crate::{define_error, datetime::secs};

define_error!{ pub NetError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// a Client with a request timeout so that an unresponsive server cannot block a run indefinitely
pub fn default_client ()->Result<Client> {
    let client = Client::builder().timeout( secs(20)).build()?;
    Ok(client)
}

/// retrieve the body of the given URL as text using HTTP GET.
/// Anything but a 200 response is an error - callers decide if/when to re-try
pub async fn get_text (client: &Client, url: &str)->Result<String> {
    let response = client.get(url).send().await?;

    match response.status() {
        StatusCode::OK => {
            Ok( response.text().await?)
        }
        StatusCode::NOT_FOUND => {
            Err( NetError::NotFoundError(format!("{url}")))
        }
        other => {
            Err( NetError::OpFailed(format!("response status {other:?}")))
        }
    }
}
