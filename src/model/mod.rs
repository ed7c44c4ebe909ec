pub mod ids;
pub mod participant;
pub mod group;
pub mod assignment;
pub mod generated_list;

// Re-exports for convenience
pub use ids::Id;
pub use participant::Participant;
pub use group::Group;
pub use assignment::Assignment;
pub use generated_list::GeneratedList;
