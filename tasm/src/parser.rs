use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "tinker.pest"]
pub struct TinkerParser;
