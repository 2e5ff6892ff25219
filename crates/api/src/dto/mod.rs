pub mod visitors;

pub use visitors::{VisitorCountResponse, VisitorsQuery};
