// Deprecation example for setguard
//
// Run with: RUST_LOG=warn cargo run --example deprecation

use serde_json::json;
use setguard::{DeprecatedValidator, SettingDescriptor, ValidatorRegistry};

struct AppSettings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = ValidatorRegistry::new();
    let descriptor = SettingDescriptor::untyped();

    // Warn-only: assignments still succeed, a warning lands in the log
    registry.attach::<AppSettings>(
        "legacy.proxy",
        &descriptor,
        Box::new(DeprecatedValidator::default()),
    )?;

    // Escalated: assignments are rejected outright
    registry.attach::<AppSettings>(
        "legacy.auth_token",
        &descriptor,
        Box::new(DeprecatedValidator::new(
            "Setting `{name}` was removed, store the token in the keychain instead",
            true,
        )),
    )?;

    println!("📢 setguard Deprecation Example\n");

    println!("✅ Assigning warn-only deprecated setting...");
    match registry.validate("legacy.proxy", &json!("http://old-proxy")) {
        Ok(()) => println!("   Success (check the log for the warning)\n"),
        Err(e) => println!("   Error: {e}\n"),
    }

    println!("❌ Assigning hard-deprecated setting...");
    match registry.validate("legacy.auth_token", &json!("s3cret")) {
        Ok(()) => println!("   Unexpected success\n"),
        Err(e) => println!("   Expected error: {e}\n"),
    }

    println!("✨ Deprecation example complete!");

    Ok(())
}
