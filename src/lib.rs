pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod lookup;
pub mod typeahead;
pub mod widgets;

#[cfg(test)]
mod test_utils;
