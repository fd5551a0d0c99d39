//! Tabular data model consumed by the analytical components.
//!
//! A [`Dataset`] is an ordered sequence of [`Row`]s, each mapping column names
//! to raw text cells. Rows are not required to share the same keys; a missing
//! key surfaces later as [`StatsError::ColumnNotFound`](crate::StatsError::ColumnNotFound)
//! when the column is extracted.

/// A single record: column name to raw cell text, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Returns the raw cell for `column`, or `None` if this row lacks the key.
    ///
    /// If a name appears more than once, the first occurrence wins.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Column names in the order they were read.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().map(|(name, _)| name.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            cells: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// An in-memory table of [`Row`]s in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names of the first row, or an empty list for an empty dataset.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.column_names().collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        Self::from_rows(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lookup() {
        let row = Row::from_iter([("city", "Oslo"), ("temperature", "4.5")]);
        assert_eq!(row.get("temperature"), Some("4.5"));
        assert_eq!(row.get("humidity"), None);
        assert_eq!(row.len(), 2);
        assert_eq!(row.column_names().collect::<Vec<_>>(), ["city", "temperature"]);
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let row = Row::from_iter([("a", "1"), ("a", "2")]);
        assert_eq!(row.get("a"), Some("1"));
    }

    #[test]
    fn test_dataset_column_names() {
        let dataset = Dataset::from_iter([
            Row::from_iter([("x", "1"), ("y", "2")]),
            Row::from_iter([("x", "3")]),
        ]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.column_names(), ["x", "y"]);
        assert!(Dataset::default().column_names().is_empty());
    }
}
