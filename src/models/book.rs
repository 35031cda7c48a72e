use rust_decimal::Decimal;

use super::Category;
use crate::chart::create_spend_chart;
use crate::error::{BookError, ChartError};

/// An ordered set of categories addressed by name (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct Book {
    categories: Vec<Category>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn add(&mut self, category: Category) -> &mut Category {
        let idx = self.categories.len();
        self.categories.push(category);
        &mut self.categories[idx]
    }

    /// Index of the category called `name`, creating an empty one if missing.
    pub fn open(&mut self, name: &str) -> usize {
        if let Some(idx) = self.position(name) {
            return idx;
        }
        tracing::debug!(category = name, "opening category");
        self.categories.push(Category::new(name));
        self.categories.len() - 1
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let lower = name.to_lowercase();
        self.categories
            .iter()
            .position(|c| c.name().to_lowercase() == lower)
    }

    pub fn find(&self, name: &str) -> Option<&Category> {
        self.position(name).map(|idx| &self.categories[idx])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        let idx = self.position(name)?;
        Some(&mut self.categories[idx])
    }

    pub fn deposit(
        &mut self,
        name: &str,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<bool, BookError> {
        Ok(self.lookup_mut(name)?.deposit(amount, description))
    }

    pub fn withdraw(
        &mut self,
        name: &str,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<bool, BookError> {
        Ok(self.lookup_mut(name)?.withdraw(amount, description))
    }

    /// Transfer between two members of the book.
    ///
    /// A category may transfer to itself: both the incoming and the outgoing
    /// entry are recorded on it and the balance is unchanged.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<bool, BookError> {
        let src = self.lookup(from)?;
        let dst = self.lookup(to)?;

        if src == dst {
            let category = &mut self.categories[src];
            if !category.check_funds(amount) {
                return Ok(false);
            }
            let name = category.name().to_string();
            if !category.deposit(amount, format!("Transfer from {name}")) {
                return Ok(false);
            }
            return Ok(category.withdraw(amount, format!("Transfer to {name}")));
        }

        let (source, target) = pair_mut(&mut self.categories, src, dst);
        Ok(source.transfer(amount, target))
    }

    pub fn spend_chart(&self) -> Result<String, ChartError> {
        create_spend_chart(&self.categories)
    }

    fn lookup(&self, name: &str) -> Result<usize, BookError> {
        self.position(name)
            .ok_or_else(|| BookError::UnknownCategory(name.to_string()))
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Category, BookError> {
        let idx = self.lookup(name)?;
        Ok(&mut self.categories[idx])
    }
}

/// Mutable borrows of two distinct slots. `a` and `b` must differ.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
