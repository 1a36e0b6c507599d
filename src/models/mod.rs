//! Core data models for outlay
//!
//! This module contains the data structures that represent the expense
//! domain: expense records, monetary amounts, and typed ids.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseUpdate, NewExpense};
pub use ids::ExpenseId;
pub use money::Money;
