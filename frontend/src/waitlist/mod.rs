pub mod client;
pub mod controller;
pub mod draft;

pub use controller::{submit, FormController, Notice, NoticeKind};
pub use draft::{FieldUpdate, FounderStage, FundingStage, PainPoint, Role};
