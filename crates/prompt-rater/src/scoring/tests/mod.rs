mod common;
mod rating;
