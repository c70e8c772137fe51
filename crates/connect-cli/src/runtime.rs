// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use connect_app::TabKind;
use connect_catalog::{Catalog, TabSnapshot};
use connect_tui::AppRuntime;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Mock,
    /// JSON catalog, re-read every time a tab mounts.
    File(PathBuf),
}

impl CatalogSource {
    fn load(&self) -> Result<Catalog> {
        match self {
            Self::Mock => Ok(Catalog::mock()),
            Self::File(path) => Catalog::load(path),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Mock => "built-in".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

pub struct CatalogRuntime {
    source: CatalogSource,
    catalog: Catalog,
}

impl CatalogRuntime {
    pub fn open(source: CatalogSource) -> Result<Self> {
        let catalog = source.load()?;
        tracing::debug!(source = %source.describe(), "catalog opened");
        Ok(Self { source, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl AppRuntime for CatalogRuntime {
    fn load_tab_snapshot(&mut self, tab: TabKind) -> Result<TabSnapshot> {
        if matches!(self.source, CatalogSource::File(_)) {
            // On a failed reload the last good catalog stays in place.
            self.catalog = self.source.load()?;
        }
        let snapshot = self.catalog.snapshot(tab);
        tracing::debug!(
            tab = tab.label(),
            rows = snapshot.row_count(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
