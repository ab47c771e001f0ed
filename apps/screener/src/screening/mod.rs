// Resume screening: field extraction, scoring, the per-request pipeline
// and its HTTP handlers.

pub mod fields;
pub mod handlers;
pub mod pipeline;
pub mod profile;
pub mod result;
pub mod scorer;
pub mod view;
