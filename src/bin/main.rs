// Copyright (c) The Hummanta Authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fs, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;

use hmt_quantity::{convert, Catalog, Numeric};

#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the unit catalog JSON file
    #[arg(long)]
    pub catalog: PathBuf,

    /// Value to convert
    #[arg(long)]
    pub value: String,

    /// UCUM code of the unit the value is displayed in
    #[arg(long)]
    pub from: String,

    /// UCUM code of the unit to convert into
    #[arg(long)]
    pub to: String,

    /// Also print the lossy float approximation
    #[arg(long)]
    pub approx: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.catalog)
        .context(format!("Failed to read catalog file: {}", args.catalog.display()))?;
    let catalog = Catalog::from_json(&text)
        .context(format!("Failed to resolve catalog: {}", args.catalog.display()))?;

    // Resolution keeps going past malformed records; surface what it
    // skipped without failing the run.
    for diagnostic in catalog.diagnostics() {
        eprintln!("{diagnostic}");
    }

    let from = catalog
        .by_code(&args.from)
        .with_context(|| format!("Unknown unit code: {}", args.from))?;
    let to = catalog
        .by_code(&args.to)
        .with_context(|| format!("Unknown unit code: {}", args.to))?;

    let result = convert(&Numeric::Text(args.value), from, to)?;
    println!("{result}");
    if args.approx {
        println!("approx. {}", result.to_approx_f64());
    }

    Ok(())
}
