//! Profile combination enumeration
//!
//! Produces every combination of profile option selections for a
//! component's selector fields as a lazy, single-pass iterator. The
//! mechanism is an explicit odometer: one index per selector column,
//! with the rightmost (last-declared) column advancing fastest and
//! carrying the increment leftwards on overflow. That is exactly nested
//! iteration with the first column outermost, without recursion.

use dcv_domain::{Combination, FieldId, OptionId};

/// One selector field together with its ordered option list
#[derive(Debug, Clone)]
pub struct SelectorColumn {
    field: FieldId,
    options: Vec<OptionId>,
}

impl SelectorColumn {
    /// Create a column from a field and its available options
    pub fn new(field: impl Into<FieldId>, options: Vec<OptionId>) -> Self {
        Self {
            field: field.into(),
            options,
        }
    }

    /// The selector field this column assigns
    pub fn field(&self) -> &FieldId {
        &self.field
    }

    /// The ordered options available for the field
    pub fn options(&self) -> &[OptionId] {
        &self.options
    }
}

/// Lazy Cartesian product over selector columns
///
/// Iteration order is odometer order: the last column's choice cycles
/// fastest. The pair order inside each produced [`Combination`] mirrors
/// the column order given to [`CombinationEnumerator::new`], which is
/// the component's field declaration order, so logs and error messages
/// replay identically across runs.
///
/// Two intentional edge behaviors, both falling out of the product
/// definition:
///
/// - no columns at all yields an empty sequence, not one empty
///   combination (callers special-case "nothing to vary" as a single
///   bare attempt);
/// - any column with zero options makes the whole product empty.
///
/// The sequence is finite and single-pass; build a fresh enumerator to
/// restart.
pub struct CombinationEnumerator {
    columns: Vec<SelectorColumn>,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl CombinationEnumerator {
    /// Create an enumerator over the given selector columns
    pub fn new(columns: Vec<SelectorColumn>) -> Self {
        let exhausted =
            columns.is_empty() || columns.iter().any(|column| column.options.is_empty());
        let odometer = vec![0; columns.len()];
        Self {
            columns,
            odometer,
            exhausted,
        }
    }

    /// Total number of combinations the full sequence will produce
    pub fn total(&self) -> usize {
        if self.columns.is_empty() {
            return 0;
        }
        self.columns
            .iter()
            .map(|column| column.options.len())
            .product()
    }
}

impl Iterator for CombinationEnumerator {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.exhausted {
            return None;
        }

        let entries = self
            .columns
            .iter()
            .zip(&self.odometer)
            .map(|(column, &index)| (column.field.clone(), column.options[index].clone()))
            .collect();

        // Advance the odometer: rightmost digit first, carrying left on
        // overflow. When the leftmost digit overflows the sequence ends.
        let mut position = self.columns.len();
        loop {
            if position == 0 {
                self.exhausted = true;
                break;
            }
            position -= 1;
            self.odometer[position] += 1;
            if self.odometer[position] < self.columns[position].options.len() {
                break;
            }
            self.odometer[position] = 0;
        }

        Some(Combination::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<OptionId> {
        values.iter().map(|v| OptionId::new(*v)).collect()
    }

    #[test]
    fn test_no_columns_yields_nothing() {
        let mut enumerator = CombinationEnumerator::new(Vec::new());
        assert_eq!(enumerator.total(), 0);
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn test_empty_option_list_empties_the_product() {
        let enumerator = CombinationEnumerator::new(vec![
            SelectorColumn::new("a", options(&["x", "y"])),
            SelectorColumn::new("b", Vec::new()),
            SelectorColumn::new("c", options(&["1", "2", "3"])),
        ]);
        assert_eq!(enumerator.count(), 0);
    }

    #[test]
    fn test_last_column_cycles_fastest() {
        let enumerator = CombinationEnumerator::new(vec![
            SelectorColumn::new("a", options(&["x", "y"])),
            SelectorColumn::new("b", options(&["1", "2"])),
        ]);

        let rendered: Vec<String> = enumerator.map(|combo| combo.render()).collect();
        assert_eq!(
            rendered,
            vec![
                "a='x', b='1'",
                "a='x', b='2'",
                "a='y', b='1'",
                "a='y', b='2'",
            ]
        );
    }

    #[test]
    fn test_product_count_and_uniqueness() {
        let enumerator = CombinationEnumerator::new(vec![
            SelectorColumn::new("a", options(&["x", "y"])),
            SelectorColumn::new("b", options(&["1", "2", "3"])),
            SelectorColumn::new("c", options(&["p", "q"])),
        ]);
        assert_eq!(enumerator.total(), 12);

        let combos: Vec<Combination> = enumerator.collect();
        assert_eq!(combos.len(), 12);
        for (i, left) in combos.iter().enumerate() {
            for right in &combos[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn test_single_column_runs_through_its_options() {
        let enumerator =
            CombinationEnumerator::new(vec![SelectorColumn::new("a", options(&["x", "y", "z"]))]);
        let rendered: Vec<String> = enumerator.map(|combo| combo.render()).collect();
        assert_eq!(rendered, vec!["a='x'", "a='y'", "a='z'"]);
    }
}
