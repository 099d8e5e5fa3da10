pub mod analyze;
pub mod dispatch;
pub mod helpers;
pub mod mst;
pub mod path;
