//! PingCity Admin Server - municipal issue tracking dashboard API
//!
//! # Architecture
//!
//! The server keeps every collection in memory, seeded at startup, and
//! derives all analytics per request:
//!
//! - **Store** (`store`): seeded in-memory collections with monotonic ids
//! - **Engines** (`engine`): pure filtering, aggregation, relevance
//!   scoring, trending ranking and insight rules over snapshots
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module layout
//!
//! ```text
//! pingcity-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── store/         # collections and seed data
//! ├── engine/        # query/aggregation/scoring cores
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod engine;
pub mod store;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use store::Store;
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResult};

/// Load .env and bring up logging from the environment
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  _            ______ _ __
   / __ \(_)___  ____ / ____/(_) /___  __
  / /_/ / / __ \/ __ `/ /   / / __/ / / /
 / ____/ / / / / /_/ / /___/ / /_/ /_/ /
/_/   /_/_/ /_/\__, /\____/_/\__/\__, /
              /____/            /____/
    "#
    );
}
