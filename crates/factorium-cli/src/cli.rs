// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::width::Width;
use clap::{Args, Parser, Subcommand};
use factorium_factorial::variant::Variant;

/// Factorial with optional overflow checking and call tracing
#[derive(Parser, Debug)]
#[command(name = "factorium")]
#[command(version)]
pub struct Cli {
    /// Log monitor events and command progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute n! with one variant
    Compute(ComputeArgs),
    /// Tabulate every variant side by side
    Compare(CompareArgs),
    /// List the variant codes
    Variants,
}

#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    /// Input value
    pub n: u128,

    /// Variant code: r, rl, rc, rcl, i, il, ic or icl
    #[arg(long, default_value = "rc")]
    pub variant: Variant,

    /// Unsigned integer type to compute in
    #[arg(short, long, value_enum, default_value_t = Width::U64)]
    pub width: Width,

    /// Trace the call even if the variant code has no `l`
    #[arg(short, long)]
    pub trace: bool,

    /// Largest input accepted by recursive variants
    #[arg(long, default_value_t = 10_000)]
    pub max_depth: u64,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Unsigned integer type to compute in
    #[arg(short, long, value_enum, default_value_t = Width::U8)]
    pub width: Width,

    /// Last input of the table [default: one past the largest input whose
    /// factorial fits]
    #[arg(short, long)]
    pub up_to: Option<u64>,

    /// Largest input accepted by recursive variants
    #[arg(long, default_value_t = 10_000)]
    pub max_depth: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compute_defaults() {
        let cli = Cli::try_parse_from(["factorium", "compute", "5"]).unwrap();
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.n, 5);
                assert_eq!(args.variant, Variant::default());
                assert_eq!(args.width, Width::U64);
                assert!(!args.trace);
                assert_eq!(args.max_depth, 10_000);
            }
            other => panic!("expected compute, got {:?}", other),
        }
    }

    #[test]
    fn test_compute_flags() {
        let cli = Cli::try_parse_from([
            "factorium", "compute", "6", "--variant", "icl", "--width", "u8", "--trace",
        ])
        .unwrap();
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.variant.to_string(), "icl");
                assert_eq!(args.width, Width::U8);
                assert!(args.trace);
            }
            other => panic!("expected compute, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["factorium", "compute", "5", "--variant", "x"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_width() {
        assert!(Cli::try_parse_from(["factorium", "compare", "--width", "i32"]).is_err());
    }
}
