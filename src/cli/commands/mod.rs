pub mod auth;
pub mod complaints;
pub mod contact;
pub mod export;
pub mod feedback;
pub mod profile;
pub mod reference;
pub mod settings;
pub mod stats;
pub mod users;

pub use contact::ContactArgs;
