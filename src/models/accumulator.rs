//! Transient state built up across device messages before a ledger commit.

/// Partial attendance record. Each field starts unset and is overwritten as
/// matching device lines arrive; a commit is only possible once all three are
/// populated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulator {
    pub token: Option<u32>,
    pub name: Option<String>,
    pub level: Option<i32>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.token.is_some() && self.name.is_some() && self.level.is_some()
    }

    /// Take the three fields for a commit. Returns None if any is missing.
    pub fn take_complete(&self) -> Option<(u32, String, i32)> {
        match (self.token, &self.name, self.level) {
            (Some(t), Some(n), Some(l)) => Some((t, n.clone(), l)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
