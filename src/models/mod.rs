pub mod project;

pub use project::{FieldEntry, Owner, ProjectsEnvelope, RawProject, SimplifiedProject};
