pub mod change_password;
pub mod create_superuser;
pub mod create_user;
pub mod initdb;
pub mod show_user;

pub use change_password::change_password;
pub use create_superuser::create_superuser;
pub use create_user::create_user;
pub use initdb::init_database;
pub use show_user::show_user;
