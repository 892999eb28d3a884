mod analytics;
mod common;
mod features;
