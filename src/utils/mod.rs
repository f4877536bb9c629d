pub mod columns;
pub mod symbols;
