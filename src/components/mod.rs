pub mod assistant;
pub mod editor;
pub mod export;
pub mod feedback;
pub mod navbar;
pub mod results_viewer;
pub mod suggested;
