pub use super::cart_assignment::Entity as CartAssignment;
pub use super::cart_location::Entity as CartLocation;
pub use super::cart_slot::Entity as CartSlot;
pub use super::cleaning_assignment::Entity as CleaningAssignment;
pub use super::congregation::Entity as Congregation;
pub use super::duty_assignment::Entity as DutyAssignment;
pub use super::meeting_program::Entity as MeetingProgram;
pub use super::permission::Entity as Permission;
pub use super::program_part::Entity as ProgramPart;
pub use super::publisher::Entity as Publisher;
pub use super::publisher_group::Entity as PublisherGroup;
pub use super::speaker::Entity as Speaker;
pub use super::talk::Entity as Talk;
pub use super::talk_schedule::Entity as TalkSchedule;
pub use super::territory::Entity as Territory;
pub use super::territory_assignment::Entity as TerritoryAssignment;
pub use super::user::Entity as User;
