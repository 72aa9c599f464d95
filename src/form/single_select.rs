// Single-selection holder for form properties
//
// A SingleSelect keeps at most one chosen value alongside the fixed set of
// values offered for display. Two rules are deliberate and easy to get wrong:
// - select() never checks membership of the permitted set. Whether a value is
//   legal is a validation concern that belongs to the form layer; the holder
//   is only the state machine.
// - deselect()/clear() are refused outright unless the holder was built with
//   deselection allowed. A mandatory field can change value but never become
//   empty again.
//
// Holders serialize through a versioned snapshot so that a persisted entity
// carries its permitted set and policy with it - nothing has to be re-supplied
// when the entity is restored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire format version for [`SingleSelectSnapshot`].
pub const SNAPSHOT_VERSION: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised by holder operations
///
/// Both are returned synchronously from the violating call; the holder never
/// logs or retries, and a failed call leaves the holder unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSelectError {
    /// selected() was called while no value is selected
    NoSelection,
    /// deselect()/clear() was called on a holder whose policy forbids it
    DeselectionNotAllowed,
}

impl fmt::Display for SingleSelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no value is currently selected"),
            Self::DeselectionNotAllowed => {
                write!(f, "deselection is not allowed for this selection")
            }
        }
    }
}

impl std::error::Error for SingleSelectError {}

/// A snapshot declared a wire version this build does not understand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotVersionError {
    pub found: u32,
}

impl fmt::Display for SnapshotVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported single-select snapshot version {} (expected {})",
            self.found, SNAPSHOT_VERSION
        )
    }
}

impl std::error::Error for SnapshotVersionError {}

// ─────────────────────────────────────────────────────────────────────────────
// Data provider
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only view of the values offered for display by a consuming UI layer.
///
/// Duplicates are dropped at construction (first occurrence wins), so the
/// item order is the stable insertion order of the distinct values.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDataProvider<T> {
    items: Vec<T>,
}

impl<T: PartialEq> ListDataProvider<T> {
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut items = Vec::new();
        for value in values {
            if !items.contains(&value) {
                items.push(value);
            }
        }
        Self { items }
    }

    /// The distinct values, in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of `value` in the item list, if it is a permitted value
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Holder
// ─────────────────────────────────────────────────────────────────────────────

/// Holds at most one selected value drawn from a fixed permitted set.
///
/// Two states: empty and selected. select() always moves to selected,
/// overwriting any prior value; deselect()/clear() move back to empty only
/// when the holder was constructed with deselection allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "SingleSelectSnapshot<T>",
    try_from = "SingleSelectSnapshot<T>"
)]
pub struct SingleSelect<T>
where
    T: Clone + PartialEq,
{
    permitted: ListDataProvider<T>,
    allow_deselection: bool,
    value: Option<T>,
}

impl<T> SingleSelect<T>
where
    T: Clone + PartialEq,
{
    /// New holder with no current value; deselection is not allowed.
    ///
    /// An empty permitted set is legal - the holder is then display-empty but
    /// still accepts select() calls.
    pub fn new<I: IntoIterator<Item = T>>(permitted: I) -> Self {
        Self {
            permitted: ListDataProvider::new(permitted),
            allow_deselection: false,
            value: None,
        }
    }

    /// New holder with no current value; deselection is allowed.
    pub fn with_deselection<I: IntoIterator<Item = T>>(permitted: I) -> Self {
        Self {
            allow_deselection: true,
            ..Self::new(permitted)
        }
    }

    /// Whether deselect()/clear() are permitted on this holder
    pub fn allow_deselection(&self) -> bool {
        self.allow_deselection
    }

    /// True iff a value is currently selected
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The currently selected value
    pub fn selected(&self) -> Result<&T, SingleSelectError> {
        self.value.as_ref().ok_or(SingleSelectError::NoSelection)
    }

    /// Set the current value, overwriting any prior selection.
    ///
    /// Always succeeds, even for values outside the permitted set - the
    /// caller is expected to have validated the value elsewhere.
    pub fn select(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Clear the current value.
    ///
    /// Refused when the deselection policy forbids it, whether or not a value
    /// is currently selected. When allowed, deselecting an already-empty
    /// holder is a no-op.
    pub fn deselect(&mut self) -> Result<(), SingleSelectError> {
        if !self.allow_deselection {
            return Err(SingleSelectError::DeselectionNotAllowed);
        }
        self.value = None;
        Ok(())
    }

    /// Synonym of deselect(): same permission check, same failure mode, same
    /// effect. The permitted set is untouched.
    pub fn clear(&mut self) -> Result<(), SingleSelectError> {
        self.deselect()
    }

    /// The values offered for display/listing by a consuming UI layer
    pub fn data_provider(&self) -> &ListDataProvider<T> {
        &self.permitted
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot (wire format)
// ─────────────────────────────────────────────────────────────────────────────

/// Versioned wire format for a holder's full state.
///
/// Carries everything needed to rebuild the holder: permitted values, the
/// deselection policy, and the current value (which may legitimately lie
/// outside the permitted set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleSelectSnapshot<T> {
    pub version: u32,
    pub permitted: Vec<T>,
    pub allow_deselection: bool,
    pub value: Option<T>,
}

impl<T> From<SingleSelect<T>> for SingleSelectSnapshot<T>
where
    T: Clone + PartialEq,
{
    fn from(select: SingleSelect<T>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            permitted: select.permitted.items,
            allow_deselection: select.allow_deselection,
            value: select.value,
        }
    }
}

impl<T> TryFrom<SingleSelectSnapshot<T>> for SingleSelect<T>
where
    T: Clone + PartialEq,
{
    type Error = SnapshotVersionError;

    fn try_from(snapshot: SingleSelectSnapshot<T>) -> Result<Self, Self::Error> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotVersionError {
                found: snapshot.version,
            });
        }
        Ok(Self {
            permitted: ListDataProvider::new(snapshot.permitted),
            allow_deselection: snapshot.allow_deselection,
            value: snapshot.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_construction_has_no_value() {
        let select: SingleSelect<i32> = SingleSelect::new([]);

        assert!(!select.has_value());
        assert!(select.data_provider().items().is_empty());
        assert!(!select.allow_deselection());
        assert_eq!(select.selected(), Err(SingleSelectError::NoSelection));
    }

    #[test]
    fn selecting_a_permitted_value_returns_it() {
        let mut select = SingleSelect::new([1, 3, 7]);
        select.select(3);

        assert_eq!(select.selected(), Ok(&3));
        assert!(select.has_value());
    }

    #[test]
    fn selecting_a_non_permitted_value_is_not_rejected() {
        // Membership is the caller's concern; the holder takes the value as-is.
        let mut select = SingleSelect::new([1, 3, 7]);
        select.select(8);

        assert_eq!(select.selected(), Ok(&8));
    }

    #[test]
    fn reselecting_overwrites_the_prior_value() {
        let mut select = SingleSelect::new([1, 3, 7]);
        select.select(3);
        select.select(7);

        assert_eq!(select.selected(), Ok(&7));
    }

    #[test]
    fn deselecting_when_not_allowed_fails_and_keeps_the_value() {
        let mut select = SingleSelect::new([1, 3, 7]);
        select.select(3);

        assert_eq!(
            select.deselect(),
            Err(SingleSelectError::DeselectionNotAllowed)
        );
        assert!(select.has_value());
        assert_eq!(select.selected(), Ok(&3));
    }

    #[test]
    fn deselecting_when_allowed_empties_the_holder() {
        let mut select = SingleSelect::with_deselection([1, 3, 7]);
        select.select(3);
        select.deselect().unwrap();

        assert!(!select.has_value());
        assert_eq!(select.selected(), Err(SingleSelectError::NoSelection));
    }

    #[test]
    fn clearing_when_not_allowed_fails() {
        let mut select = SingleSelect::new([1, 3, 7]);
        select.select(3);

        assert_eq!(
            select.clear(),
            Err(SingleSelectError::DeselectionNotAllowed)
        );
        assert_eq!(select.selected(), Ok(&3));
    }

    #[test]
    fn clearing_when_allowed_empties_the_holder() {
        let mut select = SingleSelect::with_deselection([1, 3, 7]);
        select.select(3);
        select.clear().unwrap();

        assert!(!select.has_value());
    }

    #[test]
    fn deselecting_an_empty_holder_respects_the_policy() {
        // Not allowed: refused even though there is nothing to clear.
        let mut strict: SingleSelect<i32> = SingleSelect::new([1, 3, 7]);
        assert_eq!(
            strict.deselect(),
            Err(SingleSelectError::DeselectionNotAllowed)
        );

        // Allowed: a no-op.
        let mut relaxed: SingleSelect<i32> = SingleSelect::with_deselection([1, 3, 7]);
        assert_eq!(relaxed.deselect(), Ok(()));
        assert!(!relaxed.has_value());
    }

    #[test]
    fn data_provider_keeps_insertion_order_and_drops_duplicates() {
        let select = SingleSelect::new([3, 1, 3, 7, 1]);

        assert_eq!(select.data_provider().items(), &[3, 1, 7]);
        assert_eq!(select.data_provider().len(), 3);
        assert!(!select.data_provider().is_empty());
        assert_eq!(select.data_provider().index_of(&7), Some(2));
        assert_eq!(select.data_provider().index_of(&8), None);
    }

    #[test]
    fn snapshot_round_trip_restores_value_permitted_set_and_policy() {
        let mut select = SingleSelect::with_deselection([1, 3, 7]);
        select.select(8); // outside the permitted set, still restored as-is

        let json = serde_json::to_string(&select).unwrap();
        let restored: SingleSelect<i32> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, select);
        assert_eq!(restored.selected(), Ok(&8));
        assert_eq!(restored.data_provider().items(), &[1, 3, 7]);
        assert!(restored.allow_deselection());
    }

    #[test]
    fn snapshot_with_unknown_version_is_rejected() {
        let json = r#"{"version":99,"permitted":[1,3,7],"allow_deselection":false,"value":3}"#;

        let result: Result<SingleSelect<i32>, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unsupported single-select snapshot version 99"));
    }

    #[test]
    fn snapshot_serializes_the_declared_version() {
        let select: SingleSelect<i32> = SingleSelect::new([1, 3, 7]);
        let snapshot = SingleSelectSnapshot::from(select);

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.permitted, vec![1, 3, 7]);
    }
}
