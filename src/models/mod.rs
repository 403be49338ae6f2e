pub mod activity;
pub mod contact;
pub mod customer;
pub mod dashboard;
pub mod opportunity;
pub mod product;

pub use activity::*;
pub use contact::*;
pub use customer::*;
pub use dashboard::*;
pub use opportunity::*;
pub use product::*;
