//! PostgreSQL implementations of the domain repository traits.

pub mod pg_classroom_repository;
pub mod pg_classroom_url_repository;
pub mod pg_saved_url_repository;

pub use pg_classroom_repository::PgClassroomRepository;
pub use pg_classroom_url_repository::PgClassroomUrlRepository;
pub use pg_saved_url_repository::PgSavedUrlRepository;
