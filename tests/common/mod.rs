pub mod builders;
pub mod events;
