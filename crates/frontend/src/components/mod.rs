mod field;
mod guarded_switch;
mod nav_bar;

pub use field::TextField;
pub use guarded_switch::GuardedSwitch;
pub use nav_bar::NavBar;
