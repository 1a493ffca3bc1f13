//! Loading of the merged base table and the ancillary reference tables.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use gef_model::{AncillarySource, GEF_ID_COLUMN, TYPE_COLUMN};

use crate::csv_table::{read_frame, require_columns};
use crate::error::Result;
use crate::paths::ProjectPaths;

/// The four ancillary reference tables, validated for their required columns.
#[derive(Debug, Clone)]
pub struct AncillaryTables {
    pub cd_projects: DataFrame,
    pub mfa_projects: DataFrame,
    pub aiddata: DataFrame,
    pub gef_projects: DataFrame,
}

impl AncillaryTables {
    pub fn get(&self, source: AncillarySource) -> &DataFrame {
        match source {
            AncillarySource::CdProjects => &self.cd_projects,
            AncillarySource::MfaProjects => &self.mfa_projects,
            AncillarySource::AidData => &self.aiddata,
            AncillarySource::GefProjects => &self.gef_projects,
        }
    }
}

/// Load the merged base table; `type` and `gef_id` are required.
pub fn load_base_table(path: &Path) -> Result<DataFrame> {
    let df = read_frame(path)?;
    require_columns(&df, path, &[TYPE_COLUMN, GEF_ID_COLUMN])?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded base table"
    );
    Ok(df)
}

/// Load one ancillary table and check its identifier and required columns.
pub fn load_ancillary_table(path: &Path, source: AncillarySource) -> Result<DataFrame> {
    let df = read_frame(path)?;
    require_columns(&df, path, &[source.id_column()])?;
    require_columns(&df, path, source.required_columns())?;
    debug!(
        source = source.label(),
        path = %path.display(),
        rows = df.height(),
        "loaded ancillary table"
    );
    Ok(df)
}

/// Load all four ancillary tables; any failure aborts the whole load.
pub fn load_ancillary_tables(paths: &ProjectPaths) -> Result<AncillaryTables> {
    let load = |source: AncillarySource| load_ancillary_table(&paths.ancillary(source), source);
    let tables = AncillaryTables {
        cd_projects: load(AncillarySource::CdProjects)?,
        mfa_projects: load(AncillarySource::MfaProjects)?,
        aiddata: load(AncillarySource::AidData)?,
        gef_projects: load(AncillarySource::GefProjects)?,
    };
    info!(
        cd_projects = tables.cd_projects.height(),
        mfa_projects = tables.mfa_projects.height(),
        aiddata = tables.aiddata.height(),
        gef_projects = tables.gef_projects.height(),
        "loaded ancillary tables"
    );
    Ok(tables)
}
