use clap::Parser;
use formpilot::prelude::*;
use std::fs;
use std::time::Instant;

/// A configuration-driven form automation engine CLI.
///
/// Dry-runs a field-configuration schema against a data record: prints the
/// exact driver action sequence per screen, followed by the verification
/// expectations the record implies. No real UI is touched; a scripted
/// driver records what would be issued.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the field-configuration JSON file
    schema_path: String,
    /// Optional path to the data record JSON file
    record_path: Option<String>,

    /// Screen identifiers to run, in submission order
    #[arg(short, long = "screen")]
    screens: Vec<String>,

    /// Save the validated schema as a binary artifact at this path
    #[arg(long)]
    save_artifact: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File loading ---
    let schema_json = fs::read_to_string(&cli.schema_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read schema file '{}': {}",
            &cli.schema_path, e
        ))
    });
    let record = if let Some(record_path) = &cli.record_path {
        FormRecord::from_file(record_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load data record from '{}': {}",
                record_path, e
            ))
        })
    } else {
        println!("No data record file provided. Using the built-in sample record.");
        FormRecord::sample()
    };

    // --- 2. Schema validation ---
    let schema = Schema::from_json(&schema_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Schema validation failed: {}", e)));
    println!(
        "Schema validated: {} screens, {} fields total.",
        schema.screens.len(),
        schema.screens.iter().map(|s| s.fields.len()).sum::<usize>()
    );

    if let Some(artifact_path) = &cli.save_artifact {
        CompiledSchema::new(schema.clone())
            .save(artifact_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("Saved compiled schema artifact to '{}'.", artifact_path);
    }

    let screens: Vec<String> = if cli.screens.is_empty() {
        schema.screens.iter().map(|s| s.id.clone()).collect()
    } else {
        cli.screens.clone()
    };

    // --- 3. Dry run ---
    let mut driver = ScriptedDriver::new();
    let runner = ScreenRunner::new(&schema, &record);
    for screen_id in &screens {
        println!("\nScreen '{}':", screen_id);
        let before = driver.calls().len();
        runner
            .run(&mut driver, screen_id)
            .await
            .unwrap_or_else(|e| exit_with_error(&format!("Run failed on '{}': {}", screen_id, e)));
        for call in &driver.calls()[before..] {
            println!("  -> {:?}", call);
        }
        if driver.calls().len() == before {
            println!("  (no actions)");
        }
    }

    // --- 4. Verification expectations ---
    let verifier = Verifier::new(&record);
    let expectations = verifier.expectations();
    println!("\nVerification expectations ({}):", expectations.len());
    for expectation in &expectations {
        println!(
            "  [{}] should read '{}'",
            expectation.element_id, expectation.expected
        );
    }

    println!("\nTotal execution: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
