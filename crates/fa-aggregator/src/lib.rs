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

//! # fa-aggregator
//!
//! Builds a [`CompanyFundamentals`] record for one ticker from seven FMP
//! resources fetched through any [`fa_core::ResourceFetcher`].
//!
//! The company profile is the only resource that can fail an aggregation: an
//! empty or failed profile means the company is unknown and [`aggregate`]
//! returns `None`. Every other resource degrades independently, leaving only
//! the fields it feeds empty.
//!
//! ```ignore
//! use fa_aggregator::aggregate;
//! use fa_client::Transport;
//!
//! let transport = Transport::new(&config)?;
//! if let Some(company) = aggregate("AAPL", &transport).await {
//!     println!("{} trades at {:?}", company.name, company.current_price);
//! }
//! ```

pub mod aggregator;
pub mod metrics;

pub use aggregator::aggregate;
pub use fa_models::CompanyFundamentals;
