// Form support - selection holders and named entity properties

mod delegate;
mod single_select;

pub use delegate::SelectProperty;
pub use single_select::{
    ListDataProvider, SingleSelect, SingleSelectError, SingleSelectSnapshot, SnapshotVersionError,
    SNAPSHOT_VERSION,
};
