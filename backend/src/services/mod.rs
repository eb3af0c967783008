pub mod cache;
pub mod dashboard_service;
#[cfg(test)]
pub mod mock_transport;
pub mod session_service;
pub mod youtube_service;
