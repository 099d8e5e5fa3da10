//! Edge-list column detection

use crate::error::{PipenetError, Result};

/// Header names tried, in order, for the first endpoint
pub const U_CANDIDATES: &[&str] = &["u", "node_u", "from", "src"];
/// Header names tried, in order, for the second endpoint
pub const V_CANDIDATES: &[&str] = &["v", "node_v", "to", "dst"];
/// Header names tried, in order, for the weight
pub const W_CANDIDATES: &[&str] = &["w", "weight", "cost", "latency"];

/// Explicit column names; `None` means auto-detect
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnOverrides<'a> {
    pub u: Option<&'a str>,
    pub v: Option<&'a str>,
    pub w: Option<&'a str>,
}

/// Header positions of the three edge columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    pub u: usize,
    pub v: usize,
    pub w: usize,
}

impl ColumnSelection {
    /// Smallest field count a row needs to carry all three columns
    pub fn min_fields(&self) -> usize {
        self.u.max(self.v).max(self.w) + 1
    }
}

/// Pick the u, v and weight columns from a header row
///
/// Explicit names must exist (exact match first, then case-insensitive).
/// Otherwise the candidate lists are tried case-insensitively. Any column
/// still unresolved takes the first header position not already chosen.
pub fn detect_columns(headers: &[String], overrides: ColumnOverrides<'_>) -> Result<ColumnSelection> {
    let u = resolve(headers, overrides.u, U_CANDIDATES)?;
    let v = resolve(headers, overrides.v, V_CANDIDATES)?;
    let w = resolve(headers, overrides.w, W_CANDIDATES)?;

    let mut taken: Vec<usize> = [u, v, w].into_iter().flatten().collect();
    let mut fallback = |slot: Option<usize>, name: &str| -> Result<usize> {
        if let Some(index) = slot {
            return Ok(index);
        }
        let index = (0..headers.len())
            .find(|i| !taken.contains(i))
            .ok_or_else(|| PipenetError::MissingColumn {
                column: name.to_string(),
                available: available(headers),
            })?;
        taken.push(index);
        Ok(index)
    };

    let selection = ColumnSelection {
        u: fallback(u, "u")?,
        v: fallback(v, "v")?,
        w: fallback(w, "w")?,
    };

    tracing::debug!(
        u = %headers[selection.u],
        v = %headers[selection.v],
        w = %headers[selection.w],
        "columns_selected"
    );

    Ok(selection)
}

fn resolve(headers: &[String], explicit: Option<&str>, candidates: &[&str]) -> Result<Option<usize>> {
    if let Some(name) = explicit {
        return find_header(headers, name)
            .map(Some)
            .ok_or_else(|| PipenetError::MissingColumn {
                column: name.to_string(),
                available: available(headers),
            });
    }

    Ok(candidates.iter().find_map(|c| find_ignore_case(headers, c)))
}

fn find_header(headers: &[String], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .or_else(|| find_ignore_case(headers, name))
}

fn find_ignore_case(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

fn available(headers: &[String]) -> String {
    if headers.is_empty() {
        "-".to_string()
    } else {
        headers.join(", ")
    }
}
