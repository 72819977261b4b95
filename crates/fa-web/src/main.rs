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

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use dotenvy::dotenv;
use fa_client::Transport;
use fa_web::{routes, AppState, ServerConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Initialize logging; actix's access log is forwarded through the same subscriber
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  // Load configuration
  let config = ServerConfig::from_env().context("Failed to load server configuration")?;
  if config.fmp.uses_demo_key() {
    warn!("FMP_API_KEY not set, using the demo key; most symbols will not resolve");
  }

  let transport = Transport::new(&config.fmp).context("Failed to create FMP transport")?;
  let state = web::Data::new(AppState::new(Arc::new(transport)));

  let (host, port) = config.bind_address();
  info!("Starting server on {}:{}", host, port);

  HttpServer::new(move || {
    App::new()
      .app_data(state.clone())
      .wrap(middleware::Logger::default())
      .configure(routes::configure)
  })
  .bind((host.as_str(), port))
  .with_context(|| format!("Failed to bind {}:{}", host, port))?
  .run()
  .await?;

  Ok(())
}
