//! Delimited-text export and import.
//!
//! Writers emit comma-separated values with CRLF record terminators and
//! minimal quoting. Distances are always written with three decimals.

use std::io::{Read, Write};

use csv::{ReaderBuilder, Terminator, Writer, WriterBuilder};

use super::error::Error;
use crate::env::{Composition, NeighborComposition, NeighborRow, neighbor_column, parse_flag};
use crate::model::record::{BondRecord, SummaryEntry};

const DISTANCE_HEADER: &str = "Min_D..A(Å)";

fn writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(out)
}

fn distance(value: f64) -> String {
    format!("{value:.3}")
}

/// Writes one row per deduplicated bond.
pub fn write_detail<W: Write>(out: W, rows: &[BondRecord], target: i64) -> Result<(), Error> {
    let mut w = writer(out);
    let center = format!("CenterAtom({target})");
    w.write_record([
        "State",
        "CenterChain",
        center.as_str(),
        "PartnerChain",
        "PartnerAtom",
        DISTANCE_HEADER,
    ])?;

    for row in rows {
        w.write_record([
            row.state.as_str(),
            row.center_chain.as_str(),
            row.center_atom.as_str(),
            row.partner_chain.as_str(),
            row.partner_atom.as_str(),
            distance(row.distance).as_str(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

/// Writes one row per state.
pub fn write_summary<W: Write>(
    out: W,
    summary: &[SummaryEntry],
    target: i64,
) -> Result<(), Error> {
    let mut w = writer(out);
    let count = format!("HBonds_involving_{target}");
    w.write_record(["State", count.as_str(), DISTANCE_HEADER])?;

    for entry in summary {
        w.write_record([
            entry.state.clone(),
            entry.count.to_string(),
            distance(entry.min_distance),
        ])?;
    }

    w.flush()?;
    Ok(())
}

/// Writes one row per scanned environment with a column per category.
pub fn write_composition<W: Write>(out: W, compositions: &[Composition]) -> Result<(), Error> {
    let mut w = writer(out);

    let mut header = vec!["State".to_string()];
    if let Some(first) = compositions.first() {
        header.extend(first.counts.iter().map(|(name, _)| name.clone()));
    }
    w.write_record(&header)?;

    for composition in compositions {
        let mut record = vec![composition.state.clone()];
        record.extend(composition.counts.iter().map(|(_, n)| n.to_string()));
        w.write_record(&record)?;
    }

    w.flush()?;
    Ok(())
}

/// Writes per-state `<category>_count` then `<category>_ratio` columns.
pub fn write_neighbor_composition<W: Write>(
    out: W,
    table: &NeighborComposition,
) -> Result<(), Error> {
    let mut w = writer(out);

    let mut header = vec!["State".to_string()];
    header.extend(table.categories.iter().map(|c| format!("{c}_count")));
    header.extend(table.categories.iter().map(|c| format!("{c}_ratio")));
    w.write_record(&header)?;

    for state in &table.states {
        let mut record = vec![state.state.clone()];
        record.extend(state.counts.iter().map(|n| n.to_string()));
        record.extend(state.ratios.iter().map(|&r| ratio(r)));
        w.write_record(&record)?;
    }

    w.flush()?;
    Ok(())
}

fn ratio(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Reads a neighbor table with `State`, `ResidueName` and `Is<target>Neighbor` columns.
///
/// Other columns are ignored. A missing required column is an error that
/// lists what the header actually contains.
pub fn read_neighbor_table<R: Read>(input: R, target: i64) -> Result<Vec<NeighborRow>, Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let flag_column = neighbor_column(target);
    let expected = ["State", "ResidueName", flag_column.as_str()];
    let found: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    Error::check_columns(&expected, &found)?;

    let position = |name: &str| found.iter().position(|h| h == name).unwrap_or_default();
    let state_idx = position("State");
    let residue_idx = position("ResidueName");
    let flag_idx = position(&flag_column);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(NeighborRow {
            state: record.get(state_idx).unwrap_or_default().to_string(),
            residue_name: record.get(residue_idx).unwrap_or_default().to_string(),
            is_neighbor: parse_flag(record.get(flag_idx).unwrap_or_default()),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ClassScheme, summarize_neighbors};

    fn bond(state: &str, partner: &str, distance: f64) -> BondRecord {
        BondRecord {
            state: state.into(),
            center_chain: "A".into(),
            center_atom: "ASN312ND2".into(),
            partner_chain: "B".into(),
            partner_atom: partner.into(),
            distance,
        }
    }

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn detail_has_fixed_header_and_three_decimals() {
        let mut out = Vec::new();
        write_detail(&mut out, &[bond("Mut_ASN312(#1)", "TYR308O", 2.95)], 312).unwrap();
        assert_eq!(
            as_text(out),
            "State,CenterChain,CenterAtom(312),PartnerChain,PartnerAtom,Min_D..A(Å)\r\n\
             Mut_ASN312(#1),A,ASN312ND2,B,TYR308O,2.950\r\n"
        );
    }

    #[test]
    fn summary_has_fixed_header_and_counts() {
        let summary = [
            SummaryEntry {
                state: "Mut".into(),
                count: 2,
                min_distance: 2.9504,
            },
            SummaryEntry {
                state: "WT".into(),
                count: 1,
                min_distance: 2.6,
            },
        ];
        let mut out = Vec::new();
        write_summary(&mut out, &summary, 312).unwrap();
        assert_eq!(
            as_text(out),
            "State,HBonds_involving_312,Min_D..A(Å)\r\nMut,2,2.950\r\nWT,1,2.600\r\n"
        );
    }

    #[test]
    fn headers_follow_target_residue() {
        let mut out = Vec::new();
        write_summary(&mut out, &[], 45).unwrap();
        assert_eq!(as_text(out), "State,HBonds_involving_45,Min_D..A(Å)\r\n");
    }

    #[test]
    fn labels_with_commas_are_quoted() {
        let mut out = Vec::new();
        write_detail(&mut out, &[bond("WT, run 2", "TYR308O", 3.0)], 312).unwrap();
        assert!(as_text(out).contains("\"WT, run 2\",A,ASN312ND2"));
    }

    #[test]
    fn identical_input_gives_identical_bytes() {
        let rows = vec![bond("Mut", "GLY305O", 3.0), bond("Mut", "TYR308O", 2.95)];
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_detail(&mut first, &rows, 312).unwrap();
        write_detail(&mut second, &rows, 312).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn composition_columns_follow_scheme_order() {
        let compositions = [Composition {
            state: "WT(ASP312)".into(),
            residues: 3,
            counts: vec![("Positive".into(), 1), ("Negative".into(), 2)],
        }];
        let mut out = Vec::new();
        write_composition(&mut out, &compositions).unwrap();
        assert_eq!(
            as_text(out),
            "State,Positive,Negative\r\nWT(ASP312),1,2\r\n"
        );
    }

    #[test]
    fn reads_neighbor_table_and_ignores_extra_columns() {
        let csv = "Chain,State,ResidueName,Is312Neighbor\nA,WT,ASP,True\nA,WT,LYS,False\nB,Mut,ASN,1\n";
        let rows = read_neighbor_table(csv.as_bytes(), 312).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            NeighborRow {
                state: "WT".into(),
                residue_name: "ASP".into(),
                is_neighbor: true
            }
        );
        assert!(!rows[1].is_neighbor);
        assert!(rows[2].is_neighbor);
    }

    #[test]
    fn missing_neighbor_column_is_reported() {
        let csv = "State,ResidueName\nWT,ASP\n";
        let err = read_neighbor_table(csv.as_bytes(), 312).unwrap_err();
        match err {
            Error::MissingColumns { expected, found } => {
                assert_eq!(expected, vec!["State", "ResidueName", "Is312Neighbor"]);
                assert_eq!(found, vec!["State", "ResidueName"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn neighbor_composition_writes_counts_then_ratios() {
        let rows = vec![
            NeighborRow {
                state: "WT".into(),
                residue_name: "ASP".into(),
                is_neighbor: true,
            },
            NeighborRow {
                state: "WT".into(),
                residue_name: "SER".into(),
                is_neighbor: true,
            },
            NeighborRow {
                state: "WT".into(),
                residue_name: "THR".into(),
                is_neighbor: true,
            },
            NeighborRow {
                state: "Mut".into(),
                residue_name: "ASN".into(),
                is_neighbor: true,
            },
        ];
        let table = summarize_neighbors(&rows, ClassScheme::table_default());
        let mut out = Vec::new();
        write_neighbor_composition(&mut out, &table).unwrap();
        assert_eq!(
            as_text(out),
            "State,negative_count,polar_count,negative_ratio,polar_ratio\r\n\
             Mut,0,1,0.0,1.0\r\n\
             WT,1,2,0.3333333333333333,0.6666666666666666\r\n"
        );
    }
}
