mod filament_file;

pub use filament_file::ExtractFilaments;
