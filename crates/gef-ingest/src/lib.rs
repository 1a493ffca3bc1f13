pub mod csv_table;
pub mod error;
pub mod paths;
pub mod tables;

pub use csv_table::{CsvTable, read_csv_table, read_frame, require_columns, write_frame};
pub use error::{IngestError, Result};
pub use paths::{ProjectPaths, ROOT_ENV_VAR, resolve_root};
pub use tables::{AncillaryTables, load_ancillary_table, load_ancillary_tables, load_base_table};
