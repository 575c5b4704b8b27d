mod analytics;
mod common;
mod matching;
