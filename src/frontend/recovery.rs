//! Synchronization sets for panic-mode recovery.
//!
//! After a mismatch the parser discards characters until it reaches a member
//! of the set belonging to that grammar point. End of input belongs to every
//! set, so a skip always stops.

/// Characters the parser may resume at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSet(&'static [char]);

impl SyncSet {
    /// Identifier start was not a letter
    pub const IDENT: SyncSet = SyncSet(&['=']);
    /// Missing `=`
    pub const ASSIGN: SyncSet = SyncSet(&['[']);
    /// Missing `[`
    pub const OPEN_LIST: SyncSet = SyncSet(&[']']);
    /// Any failure inside an element (string or number)
    pub const ELEMENT: SyncSet = SyncSet(&[',', ']', ';']);
    /// Missing `]`
    pub const CLOSE_LIST: SyncSet = SyncSet(&[';']);
    /// Missing `;`: only end of input
    pub const END: SyncSet = SyncSet(&[]);

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

/// First position at or after `pos` holding a member of `set`, or
/// `chars.len()` when there is none.
pub fn skip_until(chars: &[char], pos: usize, set: SyncSet) -> usize {
    chars
        .iter()
        .enumerate()
        .skip(pos)
        .find(|(_, c)| set.contains(**c))
        .map_or(chars.len(), |(i, _)| i)
}
