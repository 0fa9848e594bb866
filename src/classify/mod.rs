//! Address classification: decides the semantic role of address rows.
//!
//! A row may hold several roles at once (a city is usually also useful
//! context), so roles are flat independent predicates rather than a
//! single category.

pub mod curated;
mod engine;
pub mod rules;

pub use engine::{classify, AddressContext, AddressRoles};
pub use rules::{
    has_place, has_postcode, is_city, is_country, is_curated_city, is_postcode, is_state,
    is_street, is_useful_for_context,
};
