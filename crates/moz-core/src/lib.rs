/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # moz-core
//!
//! Shared building blocks for the Moz Links API v2 client crates: the
//! endpoint catalogue, credentials, configuration and the error type.

pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;

pub use config::{Config, ContentType};
pub use credentials::Credentials;
pub use endpoint::Endpoint;
pub use error::{Error, Result};

/// Base URL for the Moz Links API (v2)
pub const MOZ_BASE_URL: &str = "https://lsapi.seomoz.com/v2";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page size the service applies to list endpoints
pub const DEFAULT_LIMIT: u32 = 50;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("moz-client/", env!("CARGO_PKG_VERSION"));
