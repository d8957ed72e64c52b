pub mod locator;
pub mod minutes_repo;

pub use locator::FsMeetingDir;
pub use minutes_repo::FsMinutesRepo;
