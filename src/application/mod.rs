pub mod add_comment;
pub mod add_thread;
pub mod delete_comment;
pub mod get_thread_detail;
pub mod toggle_like;
