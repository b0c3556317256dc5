// One module per resource; each module builds its own Router and applies
// its per-route guards, the way the top-level app merges them.
pub mod auth;
pub mod companies;
pub mod jobs;
pub mod users;
