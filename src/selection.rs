//! Row Selection
//!
//! Bulk-selection bookkeeping for the supplier/contact table.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::models::{Contact, Supplier};

/// Table row key; supplier and contact ids live in separate namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowKey {
    Supplier(i64),
    Contact(i64),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Supplier(id) => write!(f, "supplier-{}", id),
            RowKey::Contact(id) => write!(f, "contact-{}", id),
        }
    }
}

/// Every selectable (contact) row, in supplier order
pub fn contact_rows(suppliers: &[Supplier], contacts_by_supplier: &HashMap<i64, Vec<Contact>>) -> Vec<RowKey> {
    suppliers
        .iter()
        .flat_map(|supplier| contacts_by_supplier.get(&supplier.id).into_iter().flatten())
        .map(|contact| RowKey::Contact(contact.id))
        .collect()
}

pub fn all_selected(selected: &BTreeSet<RowKey>, rows: &[RowKey]) -> bool {
    !rows.is_empty() && rows.iter().all(|row| selected.contains(row))
}

pub fn toggle_row(selected: &mut BTreeSet<RowKey>, row: RowKey) {
    if !selected.remove(&row) {
        selected.insert(row);
    }
}

/// Clear when everything is selected, otherwise select every row
pub fn toggle_all(selected: &mut BTreeSet<RowKey>, rows: &[RowKey]) {
    if all_selected(selected, rows) {
        selected.clear();
    } else {
        *selected = rows.iter().copied().collect();
    }
}
