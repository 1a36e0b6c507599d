//! Expense store
//!
//! Owns the in-memory expense collection and its persistence to a single
//! JSON backing file. Every mutation validates first, applies in memory,
//! then rewrites the backing file; a failed write-back rolls the in-memory
//! state back so memory and disk never diverge.

use std::path::PathBuf;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, ExpenseId, ExpenseUpdate, NewExpense};

use super::file_io::{read_json, write_json_atomic};

/// On-disk document shape of the backing file
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Durable store of expense records
///
/// Records are held in insertion order. Callers only ever receive clones;
/// nothing outside the store can alias its internal state.
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl ExpenseStore {
    /// Create a store backed by the given file (not yet loaded)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
            next_id: ExpenseId::new(1),
        }
    }

    /// Load the backing file into memory
    ///
    /// An absent file initializes an empty collection. A file that exists
    /// but cannot be parsed fails with `OutlayError::Corrupt` and leaves
    /// the store untouched.
    pub fn load(&mut self) -> OutlayResult<()> {
        let data: ExpenseData = read_json(&self.path)?;

        self.next_id = data
            .expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(ExpenseId::new(1));
        self.expenses = data.expenses;

        Ok(())
    }

    /// Add a new expense, assign it an id, and persist
    ///
    /// Returns the created record. Fails with `Validation` before anything
    /// is changed if the input violates invariants.
    pub fn add(&mut self, input: NewExpense) -> OutlayResult<Expense> {
        validate_amount(&input.amount)?;
        validate_category(&input.category)?;

        let expense = Expense {
            id: self.next_id,
            amount: input.amount,
            category: input.category,
            date: input.date,
            description: input.description,
        };

        self.expenses.push(expense.clone());
        if let Err(e) = self.persist() {
            self.expenses.pop();
            return Err(e);
        }
        self.next_id = self.next_id.next();

        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> OutlayResult<Expense> {
        self.expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| OutlayError::expense_not_found(id.to_string()))
    }

    /// Apply a partial update to an expense and persist
    ///
    /// Omitted fields keep their prior values. The merged record is
    /// re-validated before anything is changed.
    pub fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> OutlayResult<Expense> {
        let index = self.index_of(id)?;

        let mut merged = self.expenses[index].clone();
        update.apply_to(&mut merged);
        validate_amount(&merged.amount)?;
        validate_category(&merged.category)?;

        let previous = std::mem::replace(&mut self.expenses[index], merged.clone());
        if let Err(e) = self.persist() {
            self.expenses[index] = previous;
            return Err(e);
        }

        Ok(merged)
    }

    /// Delete an expense by id and persist
    pub fn delete(&mut self, id: ExpenseId) -> OutlayResult<()> {
        let index = self.index_of(id)?;

        let removed = self.expenses.remove(index);
        if let Err(e) = self.persist() {
            self.expenses.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }

    /// Snapshot of all expenses in insertion order
    pub fn all(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Number of expenses in the store
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn index_of(&self, id: ExpenseId) -> OutlayResult<usize> {
        self.expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| OutlayError::expense_not_found(id.to_string()))
    }

    /// Full rewrite of the backing file from the in-memory collection
    fn persist(&self) -> OutlayResult<()> {
        let data = ExpenseData {
            expenses: self.expenses.clone(),
        };
        write_json_atomic(&self.path, &data)
    }
}

fn validate_amount(amount: &crate::models::Money) -> OutlayResult<()> {
    if !amount.is_positive() {
        return Err(OutlayError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(())
}

fn validate_category(category: &str) -> OutlayResult<()> {
    if category.trim().is_empty() {
        return Err(OutlayError::Validation("Category must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let mut store = ExpenseStore::new(path);
        store.load().unwrap();
        (temp_dir, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn groceries() -> NewExpense {
        NewExpense::new(
            Money::from_cents(12450),
            "Food",
            date(2025, 1, 12),
            "groceries",
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_get_returns_equal_record() {
        let (_temp_dir, mut store) = create_test_store();

        let created = store.add(groceries()).unwrap();
        let fetched = store.get(created.id).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.amount, Money::from_cents(12450));
        assert_eq!(fetched.category, "Food");
    }

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let (_temp_dir, mut store) = create_test_store();

        let a = store.add(groceries()).unwrap();
        let b = store
            .add(NewExpense::new(
                Money::from_cents(500),
                "Food",
                date(2025, 1, 5),
                "",
            ))
            .unwrap();

        assert_eq!(a.id, ExpenseId::new(1));
        assert_eq!(b.id, ExpenseId::new(2));
    }

    #[test]
    fn test_id_counter_survives_reload_after_delete() {
        let (temp_dir, mut store) = create_test_store();

        store.add(groceries()).unwrap();
        let second = store
            .add(NewExpense::new(
                Money::from_cents(200),
                "Transport",
                date(2025, 1, 12),
                "",
            ))
            .unwrap();
        store.delete(ExpenseId::new(1)).unwrap();

        let mut reloaded = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        reloaded.load().unwrap();
        let third = reloaded
            .add(NewExpense::new(
                Money::from_cents(300),
                "Food",
                date(2025, 1, 13),
                "",
            ))
            .unwrap();

        // max existing id was 2, so the next assignment is 3
        assert_eq!(second.id, ExpenseId::new(2));
        assert_eq!(third.id, ExpenseId::new(3));
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store
            .add(NewExpense::new(
                Money::from_cents(-5),
                "Food",
                date(2025, 1, 1),
                "",
            ))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        let err = store
            .add(NewExpense::new(Money::zero(), "Food", date(2025, 1, 1), ""))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_category() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store
            .add(NewExpense::new(
                Money::from_cents(100),
                "  ",
                date(2025, 1, 1),
                "",
            ))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_unknown_id_not_found() {
        let (_temp_dir, store) = create_test_store();
        let err = store.get(ExpenseId::new(99)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_changes_only_specified_fields() {
        let (_temp_dir, mut store) = create_test_store();
        let created = store.add(groceries()).unwrap();

        let updated = store
            .update(created.id, ExpenseUpdate::new().amount(Money::from_cents(6000)))
            .unwrap();

        assert_eq!(updated.amount, Money::from_cents(6000));
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.date, date(2025, 1, 12));
        assert_eq!(updated.description, "groceries");
        assert_eq!(store.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_rejects_invalid_merged_record() {
        let (_temp_dir, mut store) = create_test_store();
        let created = store.add(groceries()).unwrap();

        let err = store
            .update(created.id, ExpenseUpdate::new().amount(Money::from_cents(-100)))
            .unwrap_err();
        assert!(err.is_validation());

        // Pre-call state is untouched
        assert_eq!(store.get(created.id).unwrap().amount, Money::from_cents(12450));
    }

    #[test]
    fn test_update_unknown_id_not_found() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store
            .update(ExpenseId::new(7), ExpenseUpdate::new().category("Transport"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_then_get_not_found() {
        let (_temp_dir, mut store) = create_test_store();
        let created = store.add(groceries()).unwrap();

        store.delete(created.id).unwrap();

        let err = store.get(created.id).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_not_found() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store.delete(ExpenseId::new(5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_all_is_insertion_ordered_snapshot() {
        let (_temp_dir, mut store) = create_test_store();

        store.add(groceries()).unwrap();
        store
            .add(NewExpense::new(
                Money::from_cents(500),
                "Food",
                date(2025, 1, 5),
                "",
            ))
            .unwrap();

        let snapshot = store.all();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, ExpenseId::new(1));
        assert_eq!(snapshot[1].id, ExpenseId::new(2));

        // Snapshot does not alias store internals
        store.delete(ExpenseId::new(1)).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_roundtrip_after_mutations() {
        let (temp_dir, mut store) = create_test_store();

        store.add(groceries()).unwrap();
        let b = store
            .add(NewExpense::new(
                Money::from_cents(500),
                "Food",
                date(2025, 1, 5),
                "",
            ))
            .unwrap();
        store
            .update(b.id, ExpenseUpdate::new().description("bus pass"))
            .unwrap();
        store.delete(ExpenseId::new(1)).unwrap();

        let mut reloaded = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        reloaded.load().unwrap();

        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let mut store = ExpenseStore::new(path);
        let err = store.load().unwrap_err();
        assert!(err.is_corrupt());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, r#"{"expenses": [{"id": "not-a-number"}]}"#).unwrap();

        let mut store = ExpenseStore::new(path);
        assert!(store.load().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_failed_persist_rolls_back_add() {
        let temp_dir = TempDir::new().unwrap();
        // Point the backing file inside a path occupied by a regular file so
        // the directory creation during persist fails.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("expenses.json");

        let mut store = ExpenseStore::new(path);
        let err = store.add(groceries()).unwrap_err();
        assert!(matches!(err, OutlayError::Io(_)));
        assert!(store.is_empty());
    }
}
