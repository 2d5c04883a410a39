mod admin;
mod dashboard;
mod login;
mod manual_import;
mod not_found;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use login::Login;
pub use manual_import::{parse_periods, ManualImport};
pub use not_found::NotFound;
