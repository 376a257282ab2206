//! Demographic filter sets
//!
//! A filter set holds one multi-select set per demographic dimension. An
//! empty set leaves that dimension unrestricted; a non-empty set requires
//! membership (OR within the dimension). The four dimensions combine with
//! AND.
//!
//! Filter sets are immutable values constructed per query — UI state never
//! leaks into the engine through a shared mutable filter.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use adlens_events::{AgeRange, Context, Gender, Income, UserAttributes};

/// A complete demographic filter for analytics queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    /// Accepted genders (empty = any)
    pub genders: HashSet<Gender>,
    /// Accepted age buckets (empty = any)
    pub ages: HashSet<AgeRange>,
    /// Accepted income bands (empty = any)
    pub incomes: HashSet<Income>,
    /// Accepted page contexts (empty = any)
    pub contexts: HashSet<Context>,
}

impl FilterSet {
    /// Create a filter with no restrictions
    pub fn none() -> Self {
        Self::default()
    }

    /// Accept an additional gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.genders.insert(gender);
        self
    }

    /// Accept an additional age bucket
    pub fn with_age(mut self, age: AgeRange) -> Self {
        self.ages.insert(age);
        self
    }

    /// Accept an additional income band
    pub fn with_income(mut self, income: Income) -> Self {
        self.incomes.insert(income);
        self
    }

    /// Accept an additional page context
    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.insert(context);
        self
    }

    /// Accept several genders at once
    pub fn with_genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.genders.extend(genders);
        self
    }

    /// Accept several age buckets at once
    pub fn with_ages(mut self, ages: impl IntoIterator<Item = AgeRange>) -> Self {
        self.ages.extend(ages);
        self
    }

    /// Accept several income bands at once
    pub fn with_incomes(mut self, incomes: impl IntoIterator<Item = Income>) -> Self {
        self.incomes.extend(incomes);
        self
    }

    /// Accept several page contexts at once
    pub fn with_contexts(mut self, contexts: impl IntoIterator<Item = Context>) -> Self {
        self.contexts.extend(contexts);
        self
    }

    /// Whether every dimension is unrestricted
    pub fn is_unrestricted(&self) -> bool {
        self.genders.is_empty()
            && self.ages.is_empty()
            && self.incomes.is_empty()
            && self.contexts.is_empty()
    }

    /// Evaluate the filter against one event's attributes
    ///
    /// Each dimension passes when its set is empty or contains the event's
    /// value; the overall result is the AND of the four dimensions.
    pub fn matches(&self, gender: Gender, age: AgeRange, income: Income, context: Context) -> bool {
        (self.genders.is_empty() || self.genders.contains(&gender))
            && (self.ages.is_empty() || self.ages.contains(&age))
            && (self.incomes.is_empty() || self.incomes.contains(&income))
            && (self.contexts.is_empty() || self.contexts.contains(&context))
    }

    /// Evaluate the filter against a user's indexed attributes
    ///
    /// Clicks and sessions carry no demographics of their own; they match
    /// through the attributes observed for their user in the impression
    /// log. A user with no indexed attributes fails every restricted
    /// dimension and passes an unrestricted filter.
    pub fn matches_attributes(&self, attributes: Option<&UserAttributes>) -> bool {
        match attributes {
            Some(attrs) => self.matches(attrs.gender, attrs.age, attrs.income, attrs.context),
            None => self.is_unrestricted(),
        }
    }
}
