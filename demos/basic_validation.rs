// Basic validation example for setguard
//
// Run with: cargo run --example basic_validation

use serde_json::json;
use setguard::{SettingDescriptor, ValidatorRegistry, ValueKind, ValueTypeValidator};

struct AppSettings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = ValidatorRegistry::new();

    // Declare the settings the framework would own
    let theme = SettingDescriptor::typed(ValueKind::String).default_value(json!("dark"));
    let font_size = SettingDescriptor::typed(ValueKind::Float).default_value(json!(14.0));
    let port = SettingDescriptor::typed(ValueKind::Integer).default_value(json!(3000));

    // Attach type checks; the hint is pulled from each descriptor
    registry.attach::<AppSettings>("ui.theme", &theme, Box::new(ValueTypeValidator::inferred()))?;
    registry.attach::<AppSettings>(
        "ui.font_size",
        &font_size,
        // Loose: integers are fine where a float is declared
        Box::new(ValueTypeValidator::inferred_loose()),
    )?;
    registry.attach::<AppSettings>(
        "network.port",
        &port,
        Box::new(ValueTypeValidator::inferred()),
    )?;

    println!("🔍 setguard Validation Example\n");

    println!("✅ Testing valid theme...");
    match registry.validate("ui.theme", &json!("light")) {
        Ok(()) => println!("   Success: theme accepted\n"),
        Err(e) => println!("   Error: {e}\n"),
    }

    println!("❌ Testing wrong kind for theme...");
    match registry.validate("ui.theme", &json!(42)) {
        Ok(()) => println!("   Unexpected success\n"),
        Err(e) => println!("   Expected error: {e}\n"),
    }

    println!("✅ Testing integer font size (loose float check)...");
    match registry.validate("ui.font_size", &json!(16)) {
        Ok(()) => println!("   Success: widening allowed\n"),
        Err(e) => println!("   Error: {e}\n"),
    }

    println!("❌ Testing float port (strict integer check)...");
    match registry.validate("network.port", &json!(80.5)) {
        Ok(()) => println!("   Unexpected success\n"),
        Err(e) => println!("   Expected error: {e}\n"),
    }

    println!("✨ Validation example complete!");

    Ok(())
}
