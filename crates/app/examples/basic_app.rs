//! Basic application example demonstrating app initialization with PathContext.
//!
//! This example shows how to create a simple application using just the
//! AppContext for path management and logging.

use app::{AppBuilder, Application, BoxError};

// Define your application
struct MyApp;

impl Application for MyApp {
    const APP_ID: &'static str = "my_app";
}

fn main() -> Result<(), BoxError> {
    println!("=== Basic App Example ===\n");

    // Initialize the application using the builder pattern
    // This sets up paths, logging, and returns an AppContext
    let app_context = AppBuilder::<MyApp>::new("1.0.0")?.build_simple();

    println!("✅ Application initialized successfully!\n");

    // Access application info
    println!("📋 Application Info:");
    println!("   App ID: {}", app_context.app_id());
    println!("   Version: {}", app_context.version());
    println!();

    // Access PathContext for all path management
    let ctx = app_context.path_context();

    println!("📂 Path Structure:");
    println!("   Environment: {:?}", ctx.environment());
    println!("   Base Path: {:?}", ctx.base_path());
    println!();

    println!("📄 Files:");
    println!("   Session document: {:?}", ctx.session_file());
    println!("   Logs: {:?}", ctx.logs_dir());
    println!();

    println!("💡 Tip: Check the logs directory for the application log file!");
    println!("   Log file: {:?}", ctx.log_file_now());

    Ok(())
}
