//! Infrastructure layer - corridor file loaders and repositories

pub mod corridor_loader;
pub mod persistence;
pub mod toll_rate_csv;

pub use corridor_loader::CorridorLoader;
pub use persistence::file_corridor_repo::apply_rate_sheet;
pub use persistence::FileCorridorRepository;
pub use toll_rate_csv::{load_toll_plazas_from_csv, read_toll_plazas_csv, write_toll_plazas_csv};
