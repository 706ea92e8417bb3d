//! Revision source implementations
//!
//! | Source | Revision identifier |
//! |--------|---------------------|
//! | `GitRevisionSource` | Any git rev-spec (`main`, `HEAD~1`, a SHA) |
//! | `DirectoryRevisionSource` | A directory path |
//! | `InMemoryRevisionSource` | A label registered with the source |

#[cfg(feature = "revision-directory")]
pub mod directory;
#[cfg(feature = "revision-git")]
pub mod git;
pub mod memory;

#[cfg(feature = "revision-directory")]
pub use directory::DirectoryRevisionSource;
#[cfg(feature = "revision-git")]
pub use git::GitRevisionSource;
pub use memory::InMemoryRevisionSource;
