mod exec_log;
pub use exec_log::{ExecLog, Executed};

mod mock_connection;
pub use mock_connection::MockConnection;

pub mod models;
