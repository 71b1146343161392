pub mod output;
pub mod templates;
pub mod terminal;
