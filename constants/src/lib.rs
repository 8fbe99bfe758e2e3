/// Shared tuning constants for depth map point cloud export
pub mod coordinate_system;
pub mod export;
pub mod histogram;
pub mod sampling;
