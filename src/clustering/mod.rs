pub mod materialize;
pub mod record_clustering;
