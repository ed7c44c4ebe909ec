pub mod assignment_queries;
pub mod roster_queries;
