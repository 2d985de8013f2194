/// Target of a new comment. With `parent_comment_id` set the comment is a reply.
#[derive(Debug, Clone)]
pub struct AddCommentRequest {
    pub owner: String,
    pub thread_id: String,
    pub parent_comment_id: Option<String>,
}
