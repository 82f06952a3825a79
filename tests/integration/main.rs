mod commands;
mod dataset;
mod registry;
mod utils;
