//! Bouwstenen voor het host-gezicht van de engine: nodes, waarden en de
//! evaluatie van een enkele node. Het beheer van de afhankelijkheidsgraaf
//! zelf (dirty-tracking, volgorde, caching) blijft bij de host.

pub mod evaluator;
pub mod node;
pub mod value;
