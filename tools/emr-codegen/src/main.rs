/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use anyhow::{bail, Result};
use clap::Parser;
use emr_codegen::emit::{stale_files, write_files};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the Smithy JSON AST model
    #[clap(long)]
    model: PathBuf,
    /// Directory the generated sources are written to
    #[clap(long)]
    output: PathBuf,
    /// Verify the sources in `--output` are current instead of writing them
    #[clap(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "error,emr_codegen=info".to_owned()),
        )
        .init();

    let args = Args::parse();
    let files = emr_codegen::generate(&args.model)?;
    if args.check {
        let stale = stale_files(&args.output, &files)?;
        if !stale.is_empty() {
            bail!(
                "generated code in {:?} is out of date: {}. Rerun emr-codegen without --check.",
                args.output,
                stale.join(", ")
            );
        }
    } else {
        write_files(&args.output, &files)?;
    }
    Ok(())
}
