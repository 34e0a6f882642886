pub mod company;

pub use company::{Company, CompanyDraft};
