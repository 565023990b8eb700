/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

pub mod signal_types;
pub mod rules;
pub mod signal_analyzer;

pub use signal_types::*;
pub use rules::*;
pub use signal_analyzer::*;
