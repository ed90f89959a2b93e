// ABOUTME: Module root for lead exporters.
// ABOUTME: Re-exports the CSV serializer for convenient access.

pub mod csv;

pub use csv::export_csv;
