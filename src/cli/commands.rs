pub mod dashboard;
pub mod login;
pub mod logout;
pub mod predict;
pub mod report;
pub mod whoami;

pub use dashboard::dashboard;
pub use login::login;
pub use logout::logout;
pub use predict::predict;
pub use report::report;
pub use whoami::whoami;
