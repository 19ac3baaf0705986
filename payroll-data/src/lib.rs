pub mod loader;

pub use loader::{
    ContributionBracketRecord, PayrollTableLoader, TableLoaderError, WithholdingBracketRecord,
};
