use crate::syntax::{Category, HighlightSpan};
use log::trace;
use std::collections::{BTreeMap, HashSet};

/// Sparse style events over a buffer, in byte offsets.
///
/// `on[x] = c` means "category `c` starts at offset `x`", `off[y] = c` means
/// "category `c` ends at offset `y`". Spans that start or end at the same
/// offset overwrite each other; the last one written wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMaps {
    pub on: BTreeMap<usize, Category>,
    pub off: BTreeMap<usize, Category>,
}

impl HighlightMaps {
    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.off.is_empty()
    }
}

/// Turn walker spans into on/off maps shifted by `base_offset`, dropping
/// spans whose category is not enabled.
///
/// # Arguments
///
/// * `spans` - Walker output, in any order
/// * `base_offset` - Offset of the parsed text within the host buffer
/// * `enabled` - Categories currently visible
pub fn emit<I>(spans: I, base_offset: usize, enabled: &HashSet<Category>) -> HighlightMaps
where
    I: IntoIterator<Item = HighlightSpan>,
{
    let mut maps = HighlightMaps::default();

    for span in spans {
        if !enabled.contains(&span.category) {
            continue;
        }

        trace!(
            "{} [{}, {})",
            span.category,
            base_offset + span.start,
            base_offset + span.end
        );
        maps.on.insert(base_offset + span.start, span.category);
        maps.off.insert(base_offset + span.end, span.category);
    }

    maps
}
