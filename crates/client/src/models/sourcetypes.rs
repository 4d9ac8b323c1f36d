//! Sourcetype models.

use serde::{Deserialize, Serialize};

use super::search::{SearchRow, cell_strings};

/// A sourcetype together with the indexes it was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sourcetype {
    pub name: String,
    #[serde(default)]
    pub indexes: Vec<String>,
}

impl Sourcetype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indexes: Vec::new(),
        }
    }

    pub fn with_indexes(mut self, indexes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.indexes = indexes.into_iter().map(Into::into).collect();
        self
    }

    /// Group `{index, sourcetype}` rows by sourcetype.
    ///
    /// Sourcetypes keep the order of their first appearance; each sourcetype's
    /// indexes keep theirs. Rows without a sourcetype are skipped.
    pub fn group_rows(rows: &[SearchRow]) -> Vec<Sourcetype> {
        let mut grouped: Vec<Sourcetype> = Vec::new();

        for row in rows {
            let Some(name) = row
                .get("sourcetype")
                .and_then(|v| cell_strings(v).first().copied())
                .filter(|s| !s.is_empty())
            else {
                continue;
            };

            let position = match grouped.iter().position(|st| st.name == name) {
                Some(pos) => pos,
                None => {
                    grouped.push(Sourcetype::new(name));
                    grouped.len() - 1
                }
            };

            if let Some(cell) = row.get("index") {
                for index in cell_strings(cell) {
                    let indexes = &mut grouped[position].indexes;
                    if !index.is_empty() && !indexes.iter().any(|i| i == index) {
                        indexes.push(index.to_string());
                    }
                }
            }
        }

        grouped
    }
}
