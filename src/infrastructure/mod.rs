pub mod ingest;
pub mod memory;
