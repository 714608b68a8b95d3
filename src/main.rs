//! Animation merge CLI - Build `.anim` files from the animation database.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anim_merge::{
    animation::{AnimationDatabase, MergedAnimation, merge},
    schema::{MergeConfig, RequestedNames},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "--example" => {
            print_example_config();
            return;
        }
        "--inspect" => {
            let Some(path) = args.get(2) else {
                print_usage(&args[0]);
                std::process::exit(1);
            };
            inspect(Path::new(path));
            return;
        }
        _ => {}
    }

    let requested = RequestedNames::parse(&args[1]).unwrap_or_else(|e| {
        log::warn!("Rejected active animations {:?}: {}", args[1], e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let config = match args.get(2) {
        Some(path) => MergeConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => MergeConfig::default(),
    };

    log::info!("Request received: active animations={}", args[1]);

    let start = Instant::now();

    let db = AnimationDatabase::open(&config.database_path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = merge(&db, &requested).unwrap_or_else(|e| {
        log::error!("Animation generation failed: {}", e);
        eprintln!("Error generating animation: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = fs::write(&config.output_path, &output.bytes) {
        eprintln!(
            "Error writing {}: {}",
            config.output_path.display(),
            e
        );
        std::process::exit(1);
    }

    println!("Animation Merge");
    println!("===============");
    println!("Database: {} ({} animations)", config.database_path.display(), db.len());
    println!("Requested: {}", requested.len());
    println!("Result: {}", output.stats);
    for (name, reason) in &output.stats.skipped {
        println!("  skipped {}: {:?}", name, reason);
    }
    println!(
        "Wrote {} bytes to {} in {:.2}ms",
        output.bytes.len(),
        config.output_path.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
}

fn inspect(path: &Path) {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let merged = MergedAnimation::parse(&bytes).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", path.display());
    println!("  Total size: {} bytes", bytes.len());
    println!("  Animation count: {}", merged.count());
    println!("  Payload size: {} bytes", merged.payload().len());
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <animations> [config.json]", program);
    eprintln!("       {} --inspect <file.anim>", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Merge animations from the hex animation database into one file.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  animations   Comma-separated animation names (A-Z, a-z, 0-9, _ and -)");
    eprintln!("  config.json  Path to merge configuration file (default paths if omitted)");
}

fn print_example_config() {
    let config = MergeConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
