//! Human-readable rendering of minimization runs
//!
//! Solving never prints. The types here borrow results and implement
//! [`Display`](fmt::Display), so they can be written to a terminal, a log or a
//! string. Prime implicants are labelled `PI1`, `PI2`, ... in chart row order.

use std::fmt;

use crate::chart::CoverageChart;
use crate::exact::Minimization;
use crate::generator::RoundTrace;
use crate::implicant::Implicant;
use crate::petrick::{PetrickExpression, SolveTrace};

/// Number of expanded terms listed before the rest is summarised
const EXPANSION_PREVIEW: usize = 10;

/// Step-by-step report of a whole minimization
///
/// # Examples
///
/// ```
/// use qm_logic::{exact, report::Report, MinimizerConfig};
///
/// let result = exact::minimize(2, &[0, 1, 2, 3], &[], &MinimizerConfig::default()).unwrap();
/// let text = Report::new(&result).to_string();
/// assert!(text.contains("1 PIs, 0 literals"));
/// ```
pub struct Report<'a> {
    minimization: &'a Minimization,
}

impl<'a> Report<'a> {
    pub fn new(minimization: &'a Minimization) -> Self {
        Report { minimization }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.minimization;

        writeln!(f, "=== Prime implicant generation ===")?;
        for round in m.rounds() {
            write_round(f, round)?;
        }
        write!(f, "{}", PrimeList(m.prime_implicants()))?;

        writeln!(f)?;
        writeln!(f, "=== Coverage chart ===")?;
        write!(f, "{}", ChartView(m.chart()))?;

        writeln!(f)?;
        write_solve(f, m.chart(), m.trace())?;

        writeln!(f)?;
        writeln!(f, "=== Minimal cover ===")?;
        for implicant in m.cover() {
            writeln!(f, "  {}", implicant)?;
        }
        writeln!(
            f,
            "{} PIs, {} literals",
            m.cover().len(),
            m.cover().literal_count()
        )
    }
}

/// Table of prime implicants with the minterms they cover
pub struct PrimeList<'a>(pub &'a [Implicant]);

impl fmt::Display for PrimeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prime implicants ({}):", self.0.len())?;
        for (i, implicant) in self.0.iter().enumerate() {
            writeln!(
                f,
                "  {:<5} {}  covers {}  ({} literal(s))",
                label(i),
                implicant,
                join(implicant.minterms().iter()),
                implicant.literal_count()
            )?;
        }
        Ok(())
    }
}

/// The coverage chart as a grid of `✓` and `·`
pub struct ChartView<'a>(pub &'a CoverageChart);

impl fmt::Display for ChartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.0;
        if chart.is_empty() {
            return writeln!(f, "(empty)");
        }

        let width = chart
            .on_set_minterms()
            .iter()
            .map(|m| m.to_string().len())
            .max()
            .unwrap_or(1);
        let label_width = label(chart.num_rows().saturating_sub(1)).len();

        write!(f, "{:label_width$}", "")?;
        for m in chart.on_set_minterms() {
            write!(f, " {:>width$}", m)?;
        }
        writeln!(f)?;

        for row in 0..chart.num_rows() {
            write!(f, "{:<label_width$}", label(row))?;
            for column in 0..chart.num_columns() {
                let mark = if chart.covers_column(row, column) { '✓' } else { '·' };
                write!(f, " {:>width$}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_round(f: &mut fmt::Formatter<'_>, round: &RoundTrace) -> fmt::Result {
    writeln!(
        f,
        "Round {}: {} implicant(s), {} merged, {} prime",
        round.round,
        round.input_len,
        round.merged,
        round.primes.len()
    )?;
    if round.groups.is_empty() {
        for (ones, size) in &round.group_sizes {
            writeln!(f, "  group {}: {} implicant(s)", ones, size)?;
        }
    } else {
        for (ones, members) in &round.groups {
            writeln!(f, "  group {}: {}", ones, join(members.iter()))?;
        }
    }
    if !round.primes.is_empty() {
        writeln!(f, "  prime: {}", join(round.primes.iter()))?;
    }
    Ok(())
}

fn write_solve(f: &mut fmt::Formatter<'_>, chart: &CoverageChart, trace: &SolveTrace) -> fmt::Result {
    writeln!(f, "=== Essential prime implicants ===")?;
    if trace.essentials.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for essential in &trace.essentials {
        writeln!(
            f,
            "  {} ({}): only cover of {}",
            label(essential.index),
            chart.prime_implicants()[essential.index],
            join(essential.sole_minterms.iter())
        )?;
    }

    if !trace.used_petrick() {
        if !chart.on_set_minterms().is_empty() {
            writeln!(f, "Essential prime implicants cover every minterm")?;
        }
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "=== Petrick's method ===")?;
    writeln!(f, "Remaining minterms: {}", join(trace.remaining.iter()))?;
    writeln!(f, "Clauses:")?;
    for clause in &trace.clauses {
        let sum: Vec<String> = clause.implicants.iter().map(|&i| label(i)).collect();
        writeln!(f, "  m{}: ({})", clause.minterm, sum.join(" + "))?;
    }

    write!(f, "Expansion sizes:")?;
    for size in &trace.expansion_sizes {
        write!(f, " {}", size)?;
    }
    writeln!(f)?;

    if let Some(expanded) = &trace.expanded {
        writeln!(f, "Expanded ({} terms):", expanded.len())?;
        write_terms(f, expanded, EXPANSION_PREVIEW)?;
    }
    if let Some(simplified) = &trace.simplified {
        writeln!(f, "After absorption ({} terms):", simplified.len())?;
        write_terms(f, simplified, EXPANSION_PREVIEW)?;
    }

    writeln!(f, "Candidates:")?;
    for term in &trace.candidates {
        writeln!(
            f,
            "  {}  {} PI(s), {} literal(s)",
            term,
            term.len(),
            chart.literal_count(term.iter())
        )?;
    }
    if let Some(selected) = &trace.selected {
        writeln!(f, "Selected: {}", selected)?;
    }
    Ok(())
}

fn write_terms(f: &mut fmt::Formatter<'_>, expression: &PetrickExpression, limit: usize) -> fmt::Result {
    for term in expression.iter().take(limit) {
        writeln!(f, "  {}", term)?;
    }
    if expression.len() > limit {
        writeln!(f, "  ... and {} more", expression.len() - limit)?;
    }
    Ok(())
}

fn label(index: usize) -> String {
    format!("PI{}", index + 1)
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact;
    use crate::MinimizerConfig;

    #[test]
    fn test_report_essentials_only() {
        let result = exact::minimize(3, &[1, 3, 5, 7], &[], &MinimizerConfig::default()).unwrap();
        let text = Report::new(&result).to_string();
        assert!(text.contains("Round 0: 4 implicant(s)"));
        assert!(text.contains("PI1 (--1): only cover of 1, 3, 5, 7"));
        assert!(!text.contains("Petrick"));
        assert!(text.ends_with("1 PIs, 1 literals\n"));
    }

    #[test]
    fn test_report_petrick_sections() {
        let config = MinimizerConfig {
            trace: true,
            ..MinimizerConfig::default()
        };
        let result = exact::minimize(3, &[0, 1, 2, 5, 6, 7], &[], &config).unwrap();
        let text = Report::new(&result).to_string();
        assert!(text.contains("group 0: 000"));
        assert!(text.contains("=== Petrick's method ==="));
        assert!(text.contains("m0: ("));
        assert!(text.contains("... and"));
        assert!(text.contains("Selected: PI"));
        assert!(text.ends_with("3 PIs, 6 literals\n"));
    }

    #[test]
    fn test_chart_view() {
        let chart = CoverageChart::build(vec!["0-".parse().unwrap(), "-1".parse().unwrap()], &[0, 1, 3], &[]);
        let text = ChartView(&chart).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    0 1 3");
        assert_eq!(lines[1], "PI1 ✓ ✓ ·");
        assert_eq!(lines[2], "PI2 · ✓ ✓");
    }

    #[test]
    fn test_empty_report() {
        let result = exact::minimize(2, &[], &[], &MinimizerConfig::default()).unwrap();
        let text = Report::new(&result).to_string();
        assert!(text.contains("(empty)"));
        assert!(text.ends_with("0 PIs, 0 literals\n"));
    }
}
