mod context;
pub mod fixers;
pub mod pipeline;

pub use context::FixContext;
pub use pipeline::PatchReport;
