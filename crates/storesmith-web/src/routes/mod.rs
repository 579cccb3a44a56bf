//! Route handlers.

pub mod icons;
pub mod logo;
pub mod metadata;
pub mod proxy;
