// src/utils/env.rs - Environment file loading
use log::{info, warn};
use std::path::Path;

const ENV_PATHS: [&str; 3] = [".env", ".env.local", "../.env"];

/// Load the first environment file found. Variables already set in the
/// process environment are left untouched.
pub fn load_env() -> bool {
    for path in ENV_PATHS.iter() {
        if Path::new(path).exists() {
            match dotenv::from_path(path) {
                Ok(()) => {
                    info!("Loaded environment variables from {}", path);
                    return true;
                }
                Err(e) => warn!("Failed to load environment from {}: {}", path, e),
            }
        }
    }
    info!("No .env file found, using process environment only");
    false
}
