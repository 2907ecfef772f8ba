//! Repositories for public-talk scheduling: visiting speakers, the outline
//! catalog, and the talk schedule itself.

pub mod catalog;
pub mod schedule;
pub mod speaker;

pub use catalog::TalkRepository;
pub use schedule::TalkScheduleRepository;
pub use speaker::SpeakerRepository;
