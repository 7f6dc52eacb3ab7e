//! Described source edits.
//!
//! Planning an edit is pure: a planner inspects the host source and returns
//! a [`ModuleEdit`]. Applying it to text is also pure; only writing the
//! result back touches disk.

use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Insert `text` at byte offset `pos` of the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertChange {
    pub pos: usize,
    pub text: String,
    pub description: String,
}

impl InsertChange {
    pub fn new(pos: usize, text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            description: description.into(),
        }
    }
}

/// All insertions planned for one file, positioned against the same source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEdit {
    path: PathBuf,
    changes: Vec<InsertChange>,
}

impl ModuleEdit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            changes: Vec::new(),
        }
    }

    pub fn with_change(mut self, change: InsertChange) -> Self {
        self.changes.push(change);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn changes(&self) -> &[InsertChange] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Apply every change to `source`.
    ///
    /// Changes are applied from the highest offset down so earlier offsets
    /// stay valid. Changes sharing an offset keep their planned order.
    pub fn apply_to(&self, source: &str) -> Result<String, DomainError> {
        let mut ordered: Vec<(usize, &InsertChange)> = self.changes.iter().enumerate().collect();
        ordered.sort_by(|(ia, a), (ib, b)| b.pos.cmp(&a.pos).then(ib.cmp(ia)));

        let mut out = source.to_string();
        for (_, change) in ordered {
            if change.pos > out.len() || !out.is_char_boundary(change.pos) {
                return Err(DomainError::InvalidEdit {
                    path: self.path.display().to_string(),
                    reason: format!(
                        "offset {} is outside the source or not on a character boundary",
                        change.pos
                    ),
                });
            }
            out.insert_str(change.pos, &change.text);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_apply_against_original_offsets() {
        let edit = ModuleEdit::new("/m.ts")
            .with_change(InsertChange::new(0, "A", "first"))
            .with_change(InsertChange::new(3, "B", "second"));
        assert_eq!(edit.apply_to("xyz").unwrap(), "AxyzB");
    }

    #[test]
    fn same_offset_keeps_planned_order() {
        let edit = ModuleEdit::new("/m.ts")
            .with_change(InsertChange::new(1, "1", "a"))
            .with_change(InsertChange::new(1, "2", "b"));
        assert_eq!(edit.apply_to("xy").unwrap(), "x12y");
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let edit = ModuleEdit::new("/m.ts").with_change(InsertChange::new(10, "A", "bad"));
        assert!(matches!(
            edit.apply_to("xy"),
            Err(DomainError::InvalidEdit { .. })
        ));
    }
}
