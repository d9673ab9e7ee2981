//! Widget library for the OmniHub TUI

mod add_device;
mod assistant;
mod dashboard;
mod fm_panel;
mod header;
mod remote;
mod status_bar;
mod tabs;
mod transmit_log;

pub use add_device::AddDeviceModal;
pub use assistant::AssistantView;
pub use dashboard::DeviceGrid;
pub use fm_panel::FmPanel;
pub use header::MainHeader;
pub use remote::RemotePanel;
pub use status_bar::StatusBar;
pub use tabs::TabBar;
pub use transmit_log::TransmitLogView;
