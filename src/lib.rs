pub mod catalogs;
pub mod configs;
pub mod languages;
pub mod pipeline;
pub mod screenshots;
pub mod translators;
