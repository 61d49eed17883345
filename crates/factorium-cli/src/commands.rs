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

use crate::cli::{CompareArgs, ComputeArgs};
use crate::width::narrow;
use anyhow::{Context, bail};
use factorium_core::num::numeric::UnsignedNumeric;
use factorium_factorial::{
    limits::largest_representable_input,
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, no_op::NoOperationMonitor,
        recording::RecordingMonitor,
    },
    variant::{Shape, Variant},
};
use std::io::Write;
use tracing::debug;

fn check_depth(variant: Variant, n: u128, max_depth: u64) -> anyhow::Result<()> {
    if variant.shape() == Shape::Recursive && n > u128::from(max_depth) {
        bail!(
            "{} exceeds the recursion limit of {} for variant {} (raise --max-depth or use an iterative variant)",
            n,
            max_depth,
            variant
        );
    }
    Ok(())
}

/// Computes `n!` with one variant and writes the trace and result to `out`.
///
/// Trace lines are written before the result, also when the computation
/// overflows.
pub fn compute<T>(args: &ComputeArgs, out: &mut dyn Write) -> anyhow::Result<()>
where
    T: UnsignedNumeric + 'static,
{
    let variant = args.variant.with_tracing(args.variant.is_traced() || args.trace);
    check_depth(variant, args.n, args.max_depth)?;
    let n: T = narrow(args.n, args.width)?;

    debug!(
        %variant,
        width = %args.width,
        bits = args.width.bits(),
        n = %args.n,
        "computing factorial"
    );

    let mut recorder = RecordingMonitor::new();
    let result = {
        let mut monitors = CompositeMonitor::with_capacity(2);
        monitors.add_monitor(LogMonitor::new());
        monitors.add_monitor(&mut recorder);
        variant.evaluate(n, &mut monitors)
    };

    for event in recorder.events() {
        writeln!(out, "{}", event)?;
    }

    let value = result.with_context(|| {
        format!(
            "{}! does not fit in {} (variant {})",
            args.n, args.width, variant
        )
    })?;
    writeln!(out, "{}! = {}", args.n, value)?;
    Ok(())
}

/// Writes a table of every variant for `n = 0..=up_to` to `out`.
///
/// Traced variants run against a no-op monitor here; only results are shown.
pub fn compare<T>(args: &CompareArgs, out: &mut dyn Write) -> anyhow::Result<()>
where
    T: UnsignedNumeric + 'static,
{
    let up_to = match args.up_to {
        Some(up_to) => u128::from(up_to),
        None => {
            let limit: u128 = num_traits::cast(largest_representable_input::<T>())
                .context("largest representable input does not fit in u128")?;
            limit + 1
        }
    };
    for variant in Variant::ALL {
        check_depth(variant, up_to, args.max_depth)?;
    }

    debug!(
        width = %args.width,
        bits = args.width.bits(),
        up_to = %up_to,
        "comparing variants"
    );

    let mut header = vec!["n".to_string()];
    header.extend(Variant::ALL.iter().map(|v| v.to_string()));
    let mut rows = vec![header];

    let mut monitor = NoOperationMonitor::new();
    for i in 0..=up_to {
        let n: T = narrow(i, args.width)?;
        let mut row = vec![i.to_string()];
        for variant in Variant::ALL {
            let cell = match variant.evaluate(n, &mut monitor) {
                Ok(value) => value.to_string(),
                Err(overflow) => format!("overflow ({})", overflow),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    write_table(&rows, out)
}

/// Writes the variant codes with their shape, arithmetic and tracing.
pub fn list_variants(out: &mut dyn Write) -> anyhow::Result<()> {
    let mut rows = vec![vec![
        "code".to_string(),
        "shape".to_string(),
        "arithmetic".to_string(),
        "traced".to_string(),
    ]];
    for variant in Variant::ALL {
        rows.push(vec![
            variant.to_string(),
            variant.shape().to_string(),
            variant.arithmetic().to_string(),
            if variant.is_traced() { "yes" } else { "no" }.to_string(),
        ]);
    }
    write_table(&rows, out)
}

fn write_table(rows: &[Vec<String>], out: &mut dyn Write) -> anyhow::Result<()> {
    let columns = rows.first().map(Vec::len).unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].len()).max().unwrap_or(0))
        .collect();
    let total = widths.iter().sum::<usize>() + 3 * columns.saturating_sub(1);

    for (index, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        writeln!(out, "{}", line.join(" | ").trim_end())?;
        if index == 0 {
            writeln!(out, "{}", "-".repeat(total))?;
        }
    }
    Ok(())
}
