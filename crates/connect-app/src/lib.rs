// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod format;
pub mod ids;
pub mod listview;
pub mod metrics;
pub mod model;
pub mod state;
pub mod style;
pub mod summary;

pub use ids::*;
pub use listview::*;
pub use metrics::*;
pub use model::*;
pub use state::*;
pub use style::*;
pub use summary::*;
