//! Run the transformation stage over a train/test CSV pair.
//!
//! Usage: preprocess <train.csv> <test.csv> [artifact-path]
//!
//! Fits the column preprocessor on the train table, transforms both tables,
//! writes the fitted artifact, and prints the resulting matrix shapes.

use examscore::{DataTransformation, TransformationConfig};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <train.csv> <test.csv> [artifact-path]", args[0]);
        std::process::exit(2);
    }

    let mut stage = DataTransformation::new();
    if let Some(artifact) = args.get(3) {
        stage = stage.with_config(TransformationConfig {
            artifact_path: PathBuf::from(artifact),
        });
    }

    println!("Loading {} and {}...", args[1], args[2]);
    let result = stage.run_from_paths(&args[1], &args[2])?;

    let (train_rows, train_cols) = result.train.dim();
    let (test_rows, test_cols) = result.test.dim();
    println!("Train matrix: {} rows x {} columns", train_rows, train_cols);
    println!("Test matrix:  {} rows x {} columns", test_rows, test_cols);
    println!(
        "Output features: {} (+1 label column)",
        result.preprocessor.n_features_out()
    );
    println!("Preprocessor saved to: {}", result.artifact_path.display());

    Ok(())
}
