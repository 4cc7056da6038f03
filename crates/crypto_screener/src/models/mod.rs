pub mod discussions;
pub mod filters;
pub mod markets;
