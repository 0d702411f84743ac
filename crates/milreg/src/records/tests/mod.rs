mod common;
mod service;
mod submission;
