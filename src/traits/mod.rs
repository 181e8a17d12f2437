//! Trait implementations for the series types (operator overloads).

mod jet_std_ops;
