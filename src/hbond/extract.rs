use log::{debug, trace, warn};

use super::grammar::match_line;
use super::orient::{Orientation, normalize};
use crate::model::record::BondRecord;

/// Line accounting for one extracted input.
///
/// `lines == matched + unmatched` and `matched == off_target + kept` always
/// hold; `self_pairs` is the subset of `kept` with the target on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub off_target: usize,
    pub kept: usize,
    pub self_pairs: usize,
}

impl ExtractStats {
    /// Lines that produced no record for any reason.
    pub fn skipped(&self) -> usize {
        self.unmatched + self.off_target
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<BondRecord>,
    pub stats: ExtractStats,
}

/// Extracts canonical records touching `target` from decoded report text.
///
/// Output follows input line order.
pub fn extract(text: &str, state: &str, target: i64) -> Extraction {
    let mut out = Extraction::default();

    for (idx, line) in split_lines(text).enumerate() {
        out.stats.lines += 1;

        let Some(raw) = match_line(line) else {
            out.stats.unmatched += 1;
            trace!("{state}: line {} does not match the record grammar", idx + 1);
            continue;
        };
        out.stats.matched += 1;

        let Some((record, orientation)) = normalize(raw, state, target) else {
            out.stats.off_target += 1;
            trace!("{state}: line {} does not involve residue {target}", idx + 1);
            continue;
        };

        if orientation == Orientation::SelfPair {
            out.stats.self_pairs += 1;
            warn!(
                "{state}: line {} pairs residue {target} with itself ({} ... {}); kept as written",
                idx + 1,
                record.center_atom,
                record.partner_atom
            );
        }

        out.stats.kept += 1;
        out.records.push(record);
    }

    debug!(
        "{state}: {} lines, {} matched, {} unmatched, {} off-target, {} kept",
        out.stats.lines,
        out.stats.matched,
        out.stats.unmatched,
        out.stats.off_target,
        out.stats.kept
    );

    out
}

/// Splits on every line boundary a text report may use, without yielding a
/// trailing empty line. `\r\n` counts as a single boundary.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((pos, c)) => {
                let line = &rest[..pos];
                let mut next = pos + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
