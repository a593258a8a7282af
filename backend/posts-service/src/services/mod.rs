/// Business logic layer for posts-service
///
/// - Post store: validation, existence checks and lifecycle of posts
/// - Comment store: comments gated on their parent post existing
/// - Validation: shape and type checks on untyped request payloads
pub mod comments;
pub mod posts;
pub mod validation;

pub use comments::{CommentError, CommentStore};
pub use posts::{PostError, PostStore};
pub use validation::ValidationFailed;
