// Named single-select properties for host entities
//
// A SelectProperty wraps a SingleSelect so a host struct can expose "a field
// that is a selection" without re-implementing holder plumbing. Reads and
// writes forward to the holder; serializing the host serializes the full
// holder state (permitted set, policy, current value) under the field.

use serde::{Deserialize, Serialize};

use crate::form::single_select::{SingleSelect, SingleSelectError};

/// A named field whose value is held by a [`SingleSelect`].
///
/// `get()` clones the current value out of the holder; use `holder()` when a
/// borrow is enough. The name is a stable identifier for logging and
/// persistence, not a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectProperty<T>
where
    T: Clone + PartialEq,
{
    name: String,
    select: SingleSelect<T>,
}

impl<T> SelectProperty<T>
where
    T: Clone + PartialEq,
{
    pub fn new(name: impl Into<String>, select: SingleSelect<T>) -> Self {
        Self {
            name: name.into(),
            select,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the current value, forwarding to the holder
    pub fn get(&self) -> Result<T, SingleSelectError> {
        self.select.selected().cloned()
    }

    /// Write a value, forwarding to the holder. Never rejected.
    pub fn set(&mut self, value: T) {
        self.select.select(value);
    }

    /// The underlying holder, for state queries and the data provider
    pub fn holder(&self) -> &SingleSelect<T> {
        &self.select
    }

    /// Mutable access for policy-gated operations (deselect/clear)
    pub fn holder_mut(&mut self) -> &mut SingleSelect<T> {
        &mut self.select
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A host entity whose price plan is one of a small fixed set. Mirrors how
    // application code is expected to embed a selection field.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
        price_plan: SelectProperty<i32>,
    }

    impl Person {
        fn new(name: &str, age: u32) -> Self {
            Self {
                name: name.to_string(),
                age,
                price_plan: SelectProperty::new("price_plan", SingleSelect::new([1, 3, 7])),
            }
        }
    }

    #[test]
    fn reads_and_writes_forward_to_the_holder() {
        let mut person = Person::new("Wiggly", 10);
        assert_eq!(person.price_plan.get(), Err(SingleSelectError::NoSelection));

        person.price_plan.set(3);

        assert_eq!(person.price_plan.get(), Ok(3));
        assert_eq!(person.price_plan.holder().selected(), Ok(&3));
        assert_eq!(person.price_plan.name(), "price_plan");
    }

    #[test]
    fn setting_overwrites_the_prior_value() {
        let mut person = Person::new("Wiggly", 10);
        person.price_plan.set(3);
        person.price_plan.set(7);

        assert_eq!(person.price_plan.get(), Ok(7));
    }

    #[test]
    fn deselection_policy_applies_through_the_wrapper() {
        let mut person = Person::new("Wiggly", 10);
        person.price_plan.set(3);

        assert_eq!(
            person.price_plan.holder_mut().deselect(),
            Err(SingleSelectError::DeselectionNotAllowed)
        );
        assert_eq!(person.price_plan.get(), Ok(3));
    }

    #[test]
    fn host_entity_round_trip_restores_the_selection() {
        let mut person = Person::new("Wiggly", 10);
        person.price_plan.set(3);

        let json = serde_json::to_string(&person).unwrap();
        let restored: Person = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, person);
        assert_eq!(restored.price_plan.get(), Ok(3));
        assert_eq!(restored.price_plan.holder().data_provider().items(), &[1, 3, 7]);
    }

    #[test]
    fn empty_selection_survives_a_round_trip() {
        let person = Person::new("Wiggly", 10);

        let json = serde_json::to_string(&person).unwrap();
        let restored: Person = serde_json::from_str(&json).unwrap();

        assert!(!restored.price_plan.holder().has_value());
        assert_eq!(restored.price_plan.get(), Err(SingleSelectError::NoSelection));
    }
}
