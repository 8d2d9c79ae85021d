use crate::Post;

/// Returns the leading run of posts written by the same user as the first post.
pub fn select_contiguous(posts: &[Post]) -> &[Post] {
    let Some(first) = posts.first() else {
        return posts;
    };
    let run = posts
        .iter()
        .position(|p| p.uid() != first.uid())
        .unwrap_or(posts.len());
    &posts[..run]
}
