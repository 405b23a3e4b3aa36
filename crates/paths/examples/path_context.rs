//! Example demonstrating the usage of PathContext for session-aware paths.

use paths::{PathContext, RuntimeEnvironment};

fn main() {
    println!("=== PathContext Example ===\n");

    // Create a path context for your application
    let ctx = PathContext::new("passbraid");

    // Display environment info
    println!("Runtime Environment: {:?}", ctx.environment());
    println!("Base Path: {:?}", ctx.base_path());
    println!("App ID: {}\n", ctx.app_id());

    // Files and directories
    println!("=== Files & Directories ===");
    println!("Session document: {:?}", ctx.session_file());
    println!("Logs: {:?}", ctx.logs_dir());
    println!("Log file (now): {:?}", ctx.log_file_now());
    println!("Log file (custom): {:?}", ctx.log_file("20240315-120000"));
    println!();

    // Example: Using PathContext in production vs development
    println!("=== Environment Detection ===");
    match ctx.environment() {
        RuntimeEnvironment::Development => {
            println!("Running in DEVELOPMENT mode");
            println!("→ Using the working tree directory structure");
        }
        RuntimeEnvironment::Production => {
            println!("Running in PRODUCTION mode");
            println!("→ Using platform-specific app data directory");
        }
    }
}
