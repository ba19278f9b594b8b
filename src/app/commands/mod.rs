pub mod compose;
pub mod db;
pub mod init;
pub mod rebuild;
pub mod start;
pub mod stop;
pub mod tls;
pub mod xdebug;
