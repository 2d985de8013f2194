use crate::{
    application::{
        add_comment::use_case::AddCommentUseCase, add_thread::use_case::AddThreadUseCase,
        delete_comment::use_case::DeleteCommentUseCase,
        get_thread_detail::use_case::GetThreadDetailUseCase,
        toggle_like::use_case::ToggleLikeUseCase,
    },
    config::Config,
    domain::{
        comment::repository::CommentRepository,
        like::repository::LikeRepository,
        shared::identity::{Clock, IdGenerator},
        thread::repository::ThreadRepository,
    },
    infrastructure::{
        identity::{SystemClock, UuidIdGenerator},
        repositories::{
            sqlx_comment_repository::SqlxCommentRepository,
            sqlx_like_repository::SqlxLikeRepository,
            sqlx_thread_repository::SqlxThreadRepository,
        },
    },
};
use sqlx::PgPool;
use std::sync::Arc;

/// Everything handlers need, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub add_thread: Arc<AddThreadUseCase>,
    pub add_comment: Arc<AddCommentUseCase>,
    pub delete_comment: Arc<DeleteCommentUseCase>,
    pub toggle_like: Arc<ToggleLikeUseCase>,
    pub get_thread_detail: Arc<GetThreadDetailUseCase>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        config: Config,
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            db,
            config,
            add_thread: Arc::new(AddThreadUseCase::new(threads.clone())),
            add_comment: Arc::new(AddCommentUseCase::new(threads.clone(), comments.clone())),
            delete_comment: Arc::new(DeleteCommentUseCase::new(
                threads.clone(),
                comments.clone(),
            )),
            toggle_like: Arc::new(ToggleLikeUseCase::new(
                threads.clone(),
                comments.clone(),
                likes.clone(),
            )),
            get_thread_detail: Arc::new(GetThreadDetailUseCase::new(threads, comments, likes)),
        }
    }

    /// Production wiring: sqlx repositories sharing one pool.
    pub fn from_pool(db: PgPool, config: Config) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let threads = Arc::new(SqlxThreadRepository::new(
            db.clone(),
            ids.clone(),
            clock.clone(),
        ));
        let comments = Arc::new(SqlxCommentRepository::new(
            db.clone(),
            ids.clone(),
            clock.clone(),
        ));
        let likes = Arc::new(SqlxLikeRepository::new(db.clone(), ids, clock));

        Self::new(db, config, threads, comments, likes)
    }
}
