//! Resource handles, one per remote resource type.

mod clients;
mod dashboard;
mod organizations;
mod project_users;
mod projects;
mod tags;
mod tasks;
mod time_entries;
mod user;
mod workspace_users;
mod workspaces;

pub use clients::{ActiveFilter, Clients};
pub use dashboard::Dashboard;
pub use organizations::Organizations;
pub use project_users::ProjectUsers;
pub use projects::Projects;
pub use tags::Tags;
pub use tasks::{ProjectTasks, Tasks};
pub use time_entries::TimeEntries;
pub use user::User;
pub use workspace_users::WorkspaceUsers;
pub use workspaces::Workspaces;
