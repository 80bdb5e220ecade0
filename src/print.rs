//! Tabulation of distributions and Monte Carlo frequencies.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::mc::WinCounter;
use crate::series::Snapshot;

/// One row per snapshot, one column per contestant.
pub fn tabulate_distribution(contestants: usize, snapshots: &[Snapshot], decimals: usize) -> Table {
    for snapshot in snapshots {
        assert_eq!(
            contestants,
            snapshot.probs.len(),
            "snapshot at final turn {} has the wrong number of contestants",
            snapshot.final_turn
        );
    }
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(6))
                    .with(HAlign::Right),
            )];
            for _ in 0..contestants {
                cols.push(Col::new(
                    Styles::default()
                        .with(MinWidth(decimals + 4))
                        .with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Turns".into()];
            for contestant in 0..contestants {
                header_cells.push(format!("P({contestant})").into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    table.push_rows(snapshots.iter().map(|snapshot| {
        let mut row_cells = vec![format!("{}", snapshot.final_turn).into()];
        for prob in &snapshot.probs {
            row_cells.push(format!("{prob:.decimals$}").into());
        }
        Row::new(Styles::default(), row_cells)
    }));
    table
}

/// Empirical win frequencies, optionally beside the exact probabilities and their difference.
pub fn tabulate_frequencies(counter: &WinCounter, matches: u64, exact: Option<&[f64]>) -> Table {
    if let Some(exact) = exact {
        assert_eq!(
            counter.wins.len(),
            exact.len(),
            "exact probabilities do not cover every contestant"
        );
    }
    let frequencies = counter.frequencies(matches);
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![
                Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
                Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
                Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            ];
            if exact.is_some() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(12)).with(HAlign::Right),
                ));
                cols.push(Col::new(
                    Styles::default().with(MinWidth(12)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Contestant".into(), "Wins".into(), "Frequency".into()];
            if exact.is_some() {
                header_cells.push("Exact".into());
                header_cells.push("Difference".into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for (contestant, frequency) in frequencies.iter().enumerate() {
        let mut row_cells = vec![
            format!("{contestant}").into(),
            format!("{}", counter.wins[contestant]).into(),
            format!("{frequency:.10}").into(),
        ];
        if let Some(exact) = exact {
            let exact = exact[contestant];
            row_cells.push(format!("{exact:.10}").into());
            row_cells.push(format!("{:+.10}", frequency - exact).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    #[test]
    fn distribution_table() {
        let snapshots = vec![
            Snapshot {
                final_turn: 1,
                probs: vec![0.5, 0.0],
            },
            Snapshot {
                final_turn: 2,
                probs: vec![0.5, 0.3333333333333333],
            },
        ];
        let table = tabulate_distribution(2, &snapshots, 4);
        assert_eq!(3, table.num_cols());
        assert_eq!(3, table.num_rows());

        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Turns"), "{rendered}");
        assert!(rendered.contains("P(0)"), "{rendered}");
        assert!(rendered.contains("P(1)"), "{rendered}");
        assert!(rendered.contains("0.3333"), "{rendered}");
        assert!(!rendered.contains("0.33333"), "{rendered}");
    }

    #[test]
    fn frequencies_table() {
        let counter = WinCounter { wins: vec![3, 1] };
        let table = tabulate_frequencies(&counter, 4, None);
        assert_eq!(3, table.num_cols());
        assert_eq!(3, table.num_rows());

        let table = tabulate_frequencies(&counter, 4, Some(&[0.7, 0.3]));
        assert_eq!(5, table.num_cols());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("0.7500000000"), "{rendered}");
        assert!(rendered.contains("+0.0500000000"), "{rendered}");
        assert!(rendered.contains("-0.0500000000"), "{rendered}");
    }

    #[test]
    #[should_panic(expected = "exact probabilities do not cover every contestant")]
    fn frequencies_table_short_exact() {
        let counter = WinCounter { wins: vec![3, 1, 2] };
        tabulate_frequencies(&counter, 6, Some(&[0.5, 0.3]));
    }

    #[test]
    #[should_panic(expected = "snapshot at final turn 2 has the wrong number of contestants")]
    fn distribution_table_mismatched_contestants() {
        let snapshots = vec![
            Snapshot {
                final_turn: 1,
                probs: vec![0.0, 0.0, 0.0],
            },
            Snapshot {
                final_turn: 2,
                probs: vec![0.3, 0.0],
            },
        ];
        tabulate_distribution(3, &snapshots, 4);
    }
}
