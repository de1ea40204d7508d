mod common;
mod elements;
